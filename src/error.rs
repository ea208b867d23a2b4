//! Game-specific error types.
//!
//! The per-frame loop itself never fails; these errors only surface while
//! loading and validating [`crate::config::GameConfig`].  Callers log them and
//! fall back to compiled defaults instead of aborting.

use std::fmt;

/// Top-level error enum for Gem Rush.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The config file exists but could not be read.
    ConfigIo {
        /// Path that was read.
        path: String,
        /// Underlying I/O error text.
        message: String,
    },

    /// The config file is not valid TOML or has a value of the wrong type.
    ConfigParse {
        /// Path (or `"<inline>"` for string input) that was parsed.
        path: String,
        /// Parser error text.
        message: String,
    },

    /// A config value is outside the range the game can run with.
    InvalidConfig {
        /// Name of the config key.
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigIo { path, message } => {
                write!(f, "failed to read config '{}': {}", path, message)
            }
            GameError::ConfigParse { path, message } => {
                write!(f, "failed to parse config '{}': {}", path, message)
            }
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is invalid (expected {})",
                name, value, expected
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is strictly positive and finite.
pub fn validate_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` is zero or positive and finite.
pub fn validate_non_negative(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "[0.0, ∞)",
        })
    }
}
