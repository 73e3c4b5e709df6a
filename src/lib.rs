//! `tscfg` — tsconfig-driven transpile options for typed config files.
//!
//! A build pipeline that lets projects author their configuration in
//! TypeScript needs two things before it can transpile and run that file:
//! the compiler front-end options (path aliases, absolute base URL,
//! import-attribute handling, target runtime version), and a way to tell
//! whether a module specifier in the file is relative, absolute, or a bare
//! package name. This crate provides both, reading at most a single
//! `tsconfig.json` directly under the working directory. Full tsconfig
//! semantics (`extends` chains, schema validation) are out of scope.

mod config;
mod error;
mod options;
mod output;
mod specifier;

pub use config::{load_ts_config, load_ts_config_with, CompilerOptions, TsConfig};
pub use error::ConfigError;
pub use options::{
    resolve_transpile_options, ImportAttributeMode, TranspileOptions, MIN_NODE_VERSION,
    TYPESCRIPT_SYNTAX,
};
pub use output::WarnOnce;
pub use specifier::{classify, SpecifierKind};
