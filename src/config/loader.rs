//! Configuration file loading.
//!
//! ## Responsibility
//! Read a TOML file from disk, parse it into a [`ScreenConfig`], and run
//! validation before returning.
//!
//! ## Guarantees
//! - A successfully loaded config is always validated
//! - I/O errors and parse errors are distinguished in the error type
//! - File path is included in every error message

use std::path::Path;

use super::validation::{self, ConfigError};
use super::ScreenConfig;

/// Load a [`ScreenConfig`] from a TOML file.
///
/// # Returns
///
/// - `Ok(ScreenConfig)` if the file is readable, well-formed, and valid.
/// - `Err(ConfigError::Io)` if the file cannot be read.
/// - `Err(ConfigError::Parse)` if the TOML is malformed.
/// - `Err(ConfigError::Validation)` if semantic constraints are violated.
///
/// # Panics
///
/// This function never panics.
pub fn load_from_file(path: &Path) -> Result<ScreenConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        file: path.display().to_string(),
        source: e,
    })?;

    load_from_str(&content, &path.display().to_string())
}

/// Load a [`ScreenConfig`] from a TOML string.
///
/// `source_name` identifies the source in error messages.
///
/// # Panics
///
/// This function never panics.
pub fn load_from_str(content: &str, source_name: &str) -> Result<ScreenConfig, ConfigError> {
    let config: ScreenConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
        file: source_name.to_string(),
        source: e,
    })?;

    validation::validate(&config).map_err(|errors| {
        ConfigError::Validation(
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    })?;

    tracing::debug!(source = source_name, "screen config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID_TOML: &str = r#"
[timing]
error_code_ms = 3000
progress_ms = 500
log_ms = 2000
frame_ms = 50

[progress]
reset_threshold = 87.0
max_increment = 15.0

[log]
window = 5

[pixels]
count = 12

[random]
seed = 7
"#;

    #[test]
    fn test_load_from_str_valid_toml_succeeds() {
        let config = load_from_str(VALID_TOML, "test.toml");
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.timing.frame_ms, 50);
        assert_eq!(config.random.seed, Some(7));
    }

    #[test]
    fn test_load_from_str_invalid_toml_returns_parse_error() {
        let result = load_from_str("not valid toml [[[", "bad.toml");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_str_validation_failure_returns_validation_error() {
        let result = load_from_str("[log]\nwindow = 0\n", "zero-window.toml");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_from_str_source_name_appears_in_error() {
        let result = load_from_str("invalid [[[", "my-source.toml");
        let msg = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.contains("my-source.toml"));
    }

    #[test]
    fn test_load_from_file_valid_toml_succeeds() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("test: tempdir: {e}"));
        let path = dir.path().join("screen.toml");
        let mut file =
            std::fs::File::create(&path).unwrap_or_else(|e| panic!("test: create: {e}"));
        file.write_all(VALID_TOML.as_bytes())
            .unwrap_or_else(|e| panic!("test: write: {e}"));

        let result = load_from_file(&path);
        assert!(result.is_ok(), "expected Ok, got {result:?}");
    }

    #[test]
    fn test_load_from_file_missing_file_returns_io_error() {
        let result = load_from_file(Path::new("/nonexistent/path/screen.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
