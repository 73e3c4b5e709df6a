/// Errors produced while loading a project configuration file.
///
/// A missing `tsconfig.json` is not an error; these variants only cover a
/// file that exists but cannot be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("{path}: invalid JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
