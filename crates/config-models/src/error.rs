//! Configuration Error Types

use thiserror::Error;

/// Errors raised while validating or parsing configuration values
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Value out of the declared slider range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Free-text input that does not parse as an integer
    #[error("not a valid integer: {0:?}")]
    InvalidInteger(String),

    /// Distance thresholds are pixel distances and cannot be negative
    #[error("distance threshold cannot be negative: {0}")]
    NegativeDistance(i64),

    /// Unknown inference engine name
    #[error("unknown inference engine: {0:?}")]
    UnknownEngine(String),
}
