//! Tutor settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Gemini API host.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Model asked for explanations.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Checked when the configured variable is unset.
const LEGACY_API_KEY_ENV: &str = "API_KEY";

/// The `[tutor]` section of the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorSettings {
    /// Whether to call the model at all. When off, the fallback is used.
    pub enabled: bool,

    pub model: String,

    pub endpoint: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for TutorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 15,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl TutorSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Read the API key from the environment.
    pub fn api_key(&self) -> Option<String> {
        [self.api_key_env.as_str(), LEGACY_API_KEY_ENV]
            .into_iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TutorSettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let settings = TutorSettings {
            timeout_secs: 0,
            ..TutorSettings::default()
        };
        assert_eq!(settings.timeout(), Duration::from_secs(1));
    }
}
