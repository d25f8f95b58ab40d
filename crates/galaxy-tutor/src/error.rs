//! Tutor error types.

use thiserror::Error;

/// Why an explanation could not be fetched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorError {
    /// The tutor is switched off in settings.
    #[error("tutor is disabled")]
    Disabled,

    /// No API key in the environment.
    #[error("no API key found in ${0}")]
    MissingApiKey(String),

    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// The request took longer than the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The API asked us to slow down.
    #[error("rate limit exceeded")]
    RateLimited,

    /// Non-success status from the API.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The model replied without any text.
    #[error("empty response from model")]
    EmptyResponse,

    /// The reply body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<reqwest::Error> for TutorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TutorError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for tutor operations.
pub type Result<T> = std::result::Result<T, TutorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_display() {
        assert_eq!(TutorError::RateLimited.to_string(), "rate limit exceeded");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TutorError::MissingApiKey("GEMINI_API_KEY".to_string()).to_string(),
            "no API key found in $GEMINI_API_KEY"
        );
    }
}
