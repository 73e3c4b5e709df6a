use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::load_ts_config;
use crate::error::ConfigError;

/// Parser syntax handed to the transpiler front end.
pub const TYPESCRIPT_SYNTAX: &str = "typescript";

/// Fallback when the host runtime does not report a version.
// TODO: raise to 20.9.0 once 18.x support is dropped.
pub const MIN_NODE_VERSION: &str = "18.18.0";

/// Compiler options for transpiling a typed config file.
#[derive(Debug, Clone, PartialEq)]
pub struct TranspileOptions {
    pub syntax: &'static str,
    /// Alias map copied verbatim from tsconfig, insertion order preserved.
    pub paths: Option<IndexMap<String, Vec<String>>>,
    /// Always absolute; the transpiler requires an absolute base whenever
    /// path aliases are used.
    pub base_url: PathBuf,
    pub import_attributes: ImportAttributeMode,
    /// Minimum runtime version to downlevel for. Advisory input only.
    pub target_node_version: String,
}

/// Import-attribute handling flags. Always fully enabled: modern `with`
/// attribute syntax is kept, and the `assert` compatibility shim stays on so
/// runtimes that removed assertion support fail fast instead of running
/// silently mistranspiled imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportAttributeMode {
    pub keep_import_attributes: bool,
    pub emit_assert_for_import_attributes: bool,
}

impl Default for ImportAttributeMode {
    fn default() -> Self {
        Self {
            keep_import_attributes: true,
            emit_assert_for_import_attributes: true,
        }
    }
}

/// Derive transpile options for the typed config file in `cwd`.
///
/// `cwd` must be absolute. `node_version` is the host runtime's
/// self-reported version, if it exposes one; `None` falls back to
/// [`MIN_NODE_VERSION`]. Fails only if tsconfig.json exists and is broken.
pub fn resolve_transpile_options(
    cwd: &Path,
    node_version: Option<&str>,
) -> Result<TranspileOptions, ConfigError> {
    let ts_config = load_ts_config(cwd)?;
    let compiler = ts_config.compiler_options.unwrap_or_default();

    // An absolute configured baseUrl replaces cwd, a relative one is joined
    // onto it, and no configuration at all means cwd itself.
    let base_url = match &compiler.base_url {
        Some(base) => cwd.join(base),
        None => cwd.to_path_buf(),
    };

    Ok(TranspileOptions {
        syntax: TYPESCRIPT_SYNTAX,
        paths: compiler.paths,
        base_url,
        import_attributes: ImportAttributeMode::default(),
        target_node_version: node_version.unwrap_or(MIN_NODE_VERSION).to_string(),
    })
}
