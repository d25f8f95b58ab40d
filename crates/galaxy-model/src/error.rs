//! Model error types.

use thiserror::Error;

/// Errors raised while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Table number outside 1–10.
    #[error("table {0} is out of range (expected 1-10)")]
    TableOutOfRange(u32),

    /// Multiplier outside 1–10.
    #[error("multiplier {0} is out of range (expected 1-10)")]
    MultiplierOutOfRange(u32),

    /// Text that is not a number at all.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// Mode key that is not one of the known modes.
    #[error("unknown mode '{0}'")]
    UnknownMode(String),

    /// A question whose options break the four-distinct-positive rule.
    #[error("invalid options for {table} x {multiplier}: {reason}")]
    InvalidOptions {
        table: u8,
        multiplier: u8,
        reason: &'static str,
    },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
