//! Configuration validation engine.
//!
//! ## Responsibility
//! Validate semantic constraints on a parsed [`ScreenConfig`] that cannot
//! be expressed through the type system alone (non-zero periods, finite
//! positive progress bounds, sane sizes).
//!
//! ## Guarantees
//! - Every validation rule has at least one test that triggers it
//! - Validation collects *all* errors before returning (no short-circuit)
//! - Error messages include the field path and the invalid value
//!
//! ## NOT Responsible For
//! - Parsing TOML (that belongs to `loader`)
//! - File I/O (that belongs to `loader`)

use super::ScreenConfig;

/// Upper bound on generated glitch blocks.
pub const MAX_PIXELS: usize = 256;

/// Upper bound on the visible log window.
pub const MAX_LOG_WINDOW: usize = 64;

/// Errors arising from configuration parsing, validation, or I/O.
///
/// # Panics
///
/// This type never panics.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing failed.
    #[error("Parse error in {file}: {source}")]
    Parse {
        /// Path of the file that failed to parse.
        file: String,
        /// Underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// One or more semantic validation rules failed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A specific field has an out-of-range value.
    #[error("Field '{field}' has invalid value {value}: {reason}")]
    InvalidField {
        /// Dot-separated field path (e.g., "timing.log_ms").
        field: String,
        /// String representation of the invalid value.
        value: String,
        /// Human-readable explanation of the constraint.
        reason: String,
    },

    /// File I/O error.
    #[error("IO error reading {file}: {source}")]
    Io {
        /// Path of the file that could not be read.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Validate all semantic constraints on a [`ScreenConfig`].
///
/// Collects every violation before returning so the caller sees the full
/// scope of issues at once.
///
/// # Returns
///
/// - `Ok(())` if all constraints pass.
/// - `Err(Vec<ConfigError>)` with every violation found.
///
/// # Panics
///
/// This function never panics.
pub fn validate(config: &ScreenConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // ── Timer periods > 0 ────────────────────────────────────────────
    let periods = [
        ("timing.error_code_ms", config.timing.error_code_ms),
        ("timing.progress_ms", config.timing.progress_ms),
        ("timing.log_ms", config.timing.log_ms),
        ("timing.frame_ms", config.timing.frame_ms),
    ];
    for (field, value) in periods {
        if value == 0 {
            errors.push(ConfigError::InvalidField {
                field: field.into(),
                value: "0".into(),
                reason: "period must be at least 1ms".into(),
            });
        }
    }

    // ── Progress bounds ──────────────────────────────────────────────
    let threshold = config.progress.reset_threshold;
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 100.0 {
        errors.push(ConfigError::InvalidField {
            field: "progress.reset_threshold".into(),
            value: threshold.to_string(),
            reason: "must be in (0, 100]".into(),
        });
    }

    let increment = config.progress.max_increment;
    if !increment.is_finite() || increment <= 0.0 {
        errors.push(ConfigError::InvalidField {
            field: "progress.max_increment".into(),
            value: increment.to_string(),
            reason: "must be a positive number".into(),
        });
    }

    // ── Log window ───────────────────────────────────────────────────
    if config.log.window == 0 || config.log.window > MAX_LOG_WINDOW {
        errors.push(ConfigError::InvalidField {
            field: "log.window".into(),
            value: config.log.window.to_string(),
            reason: format!("must be between 1 and {MAX_LOG_WINDOW}"),
        });
    }

    // ── Pixel count ──────────────────────────────────────────────────
    if config.pixels.count > MAX_PIXELS {
        errors.push(ConfigError::InvalidField {
            field: "pixels.count".into(),
            value: config.pixels.count.to_string(),
            reason: format!("must be at most {MAX_PIXELS}"),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
