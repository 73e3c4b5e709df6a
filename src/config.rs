use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::output::WarnOnce;

/// Process-wide dedup flag for the `extends` advisory.
static EXTENDS_ADVISORY: WarnOnce = WarnOnce::new();

/// Partial view of a project's tsconfig.json.
///
/// Only the fields this crate consumes are decoded; everything else is
/// ignored. Every field is genuinely optional, so an empty record stands in
/// for a missing file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    pub extends: Option<String>,
    pub compiler_options: Option<CompilerOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub base_url: Option<String>,
    pub paths: Option<IndexMap<String, Vec<String>>>,
}

/// Load `tsconfig.json` from `cwd`, if present.
///
/// A missing file yields an empty record; this is the common case and not an
/// error. A file that exists but cannot be read or parsed is a real user
/// error and propagates. Full tsconfig semantics are deliberately not
/// implemented here: if the file declares `extends`, a one-time advisory is
/// emitted and the record is used as-is, without following the chain.
pub fn load_ts_config(cwd: &Path) -> Result<TsConfig, ConfigError> {
    load_ts_config_with(cwd, &EXTENDS_ADVISORY)
}

/// Like [`load_ts_config`], with an explicit advisory flag.
pub fn load_ts_config_with(cwd: &Path, advisory: &WarnOnce) -> Result<TsConfig, ConfigError> {
    let path = cwd.join("tsconfig.json");

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TsConfig::default()),
        Err(err) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source: err,
            })
        }
    };

    // tsconfig.json is JSONC in the wild.
    let stripped = strip_jsonc_comments(&content);

    let ts_config: TsConfig =
        serde_json::from_str(&stripped).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    if ts_config.extends.is_some() {
        advisory.warn("`extends` in tsconfig.json is not supported here; the field is ignored");
    }

    Ok(ts_config)
}

/// Strip JSONC comments (`//` line and `/* */` block), leaving string
/// literals untouched.
fn strip_jsonc_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // Copy string literals verbatim, honoring escapes.
            '"' => {
                out.push('"');
                while let Some(c) = chars.next() {
                    out.push(c);
                    if c == '\\' {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    } else if c == '"' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            c => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_yields_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_ts_config(dir.path()).unwrap();
        assert_eq!(cfg, TsConfig::default());
    }

    #[test]
    fn parses_base_url_and_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("tsconfig.json"),
            r##"{
  "compilerOptions": {
    "baseUrl": "src",
    "paths": {
      "@/*": ["src/*"],
      "#lib/*": ["lib/*", "vendor/lib/*"]
    }
  }
}"##,
        )
        .unwrap();

        let cfg = load_ts_config(dir.path()).unwrap();
        let compiler = cfg.compiler_options.unwrap();
        assert_eq!(compiler.base_url.as_deref(), Some("src"));

        let paths = compiler.paths.unwrap();
        let patterns: Vec<&String> = paths.keys().collect();
        assert_eq!(patterns, ["@/*", "#lib/*"]);
        assert_eq!(paths["#lib/*"], vec!["lib/*", "vendor/lib/*"]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("tsconfig.json"),
            r#"{
  "include": ["src"],
  "compilerOptions": {
    "strict": true,
    "target": "es2022"
  }
}"#,
        )
        .unwrap();

        let cfg = load_ts_config(dir.path()).unwrap();
        let compiler = cfg.compiler_options.unwrap();
        assert_eq!(compiler.base_url, None);
        assert_eq!(compiler.paths, None);
    }

    #[test]
    fn invalid_json_propagates_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tsconfig.json"), "{ not json").unwrap();

        let err = load_ts_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("tsconfig.json"));
    }

    #[test]
    fn jsonc_comments_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("tsconfig.json"),
            r#"{
  // compiler settings
  "compilerOptions": {
    /* alias roots */
    "baseUrl": "."
  }
}"#,
        )
        .unwrap();

        let cfg = load_ts_config(dir.path()).unwrap();
        assert_eq!(
            cfg.compiler_options.unwrap().base_url.as_deref(),
            Some(".")
        );
    }

    #[test]
    fn extends_fires_advisory_once_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("tsconfig.json"),
            r#"{ "extends": "./base.json", "compilerOptions": { "baseUrl": "src" } }"#,
        )
        .unwrap();

        let advisory = WarnOnce::new();
        let cfg = load_ts_config_with(dir.path(), &advisory).unwrap();
        // The record is still used; the chain is just not followed.
        assert_eq!(cfg.extends.as_deref(), Some("./base.json"));
        assert_eq!(
            cfg.compiler_options.unwrap().base_url.as_deref(),
            Some("src")
        );
        assert!(advisory.fired());

        load_ts_config_with(dir.path(), &advisory).unwrap();
        load_ts_config_with(dir.path(), &advisory).unwrap();
        // Dedup state lives in the flag, so a second emission is impossible;
        // WarnOnce's own tests pin down the at-most-once behavior.
        assert!(advisory.fired());
    }

    #[test]
    fn no_advisory_without_extends() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();

        let advisory = WarnOnce::new();
        load_ts_config_with(dir.path(), &advisory).unwrap();
        assert!(!advisory.fired());
    }

    #[test]
    fn strip_jsonc_removes_line_comments() {
        let input = "{\n  // comment\n  \"key\": \"value\"\n}";
        let result = strip_jsonc_comments(input);
        assert!(!result.contains("//"));
        assert!(result.contains("\"key\": \"value\""));
    }

    #[test]
    fn strip_jsonc_removes_block_comments() {
        let input = "{ /* block */ \"key\": \"value\" }";
        let result = strip_jsonc_comments(input);
        assert!(!result.contains("/*"));
        assert!(result.contains("\"key\": \"value\""));
    }

    #[test]
    fn strip_jsonc_preserves_slashes_in_strings() {
        let input = r#"{ "url": "https://example.com/api" }"#;
        assert_eq!(strip_jsonc_comments(input), input);
    }

    #[test]
    fn strip_jsonc_preserves_escaped_quotes() {
        let input = r#"{ "key": "a \" // not a comment" }"#;
        assert_eq!(strip_jsonc_comments(input), input);
    }

    #[test]
    fn strip_jsonc_handles_unterminated_block_comment() {
        let input = "{ /* never closed";
        assert_eq!(strip_jsonc_comments(input), "{ ");
    }
}
