//! Quiz error types.

use galaxy_model::ModelError;
use thiserror::Error;

/// Errors raised while building a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A fixed multiplier order that is not a permutation of 1–10.
    #[error("multiplier order must use each of 1-10 exactly once: {0}")]
    InvalidOrder(String),

    /// A question failed validation.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type alias for quiz operations.
pub type Result<T> = std::result::Result<T, QuizError>;
