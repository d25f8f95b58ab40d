//! The explanation contract and its fallback.

use std::future::Future;

use galaxy_model::Fact;

use crate::config::TutorSettings;
use crate::error::{Result, TutorError};
use crate::gemini::GeminiClient;
use crate::prompt::fallback_explanation;

/// Anything that can explain a fact.
pub trait Explainer: Send + Sync {
    fn explain(&self, fact: Fact) -> impl Future<Output = Result<String>> + Send;
}

impl Explainer for GeminiClient {
    fn explain(&self, fact: Fact) -> impl Future<Output = Result<String>> + Send {
        GeminiClient::explain(self, fact)
    }
}

/// The explainer the app runs with.
#[derive(Debug, Clone)]
pub enum Tutor {
    Online(GeminiClient),
    /// Every request fails with the stored reason, so callers fall back.
    Offline(OfflineReason),
}

/// Why the tutor runs offline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfflineReason {
    Disabled,
    MissingApiKey(String),
}

impl Tutor {
    /// Connect according to settings. Never fails; problems leave it offline.
    pub fn from_settings(settings: &TutorSettings) -> Self {
        if !settings.enabled {
            tracing::info!("AI tutor disabled in settings");
            return Self::Offline(OfflineReason::Disabled);
        }
        match GeminiClient::from_settings(settings) {
            Ok(client) => Self::Online(client),
            Err(error) => {
                tracing::warn!(%error, "AI tutor unavailable, using built-in explanations");
                Self::Offline(OfflineReason::MissingApiKey(settings.api_key_env.clone()))
            }
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online(_))
    }
}

impl Explainer for Tutor {
    async fn explain(&self, fact: Fact) -> Result<String> {
        match self {
            Self::Online(client) => client.explain(fact).await,
            Self::Offline(OfflineReason::Disabled) => Err(TutorError::Disabled),
            Self::Offline(OfflineReason::MissingApiKey(var)) => {
                Err(TutorError::MissingApiKey(var.clone()))
            }
        }
    }
}

/// Explain `fact`, or return the fixed fallback sentence on any failure.
pub async fn explain_or_fallback<E: Explainer + ?Sized>(explainer: &E, fact: Fact) -> String {
    match explainer.explain(fact).await {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!(%fact, %error, "explanation failed, using fallback");
            fallback_explanation(fact)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_model::{Multiplier, Table};

    struct Canned(Option<&'static str>);

    impl Explainer for Canned {
        async fn explain(&self, _fact: Fact) -> Result<String> {
            self.0.map(str::to_string).ok_or(TutorError::Timeout)
        }
    }

    fn fact(a: u32, b: u32) -> Fact {
        Fact::new(Table::new(a).unwrap(), Multiplier::new(b).unwrap())
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let text = explain_or_fallback(&Canned(Some("۴ تا ۶ تایی")), fact(4, 6)).await;
        assert_eq!(text, "۴ تا ۶ تایی");
    }

    #[tokio::test]
    async fn test_failure_uses_fallback() {
        let text = explain_or_fallback(&Canned(None), fact(4, 6)).await;
        assert!(text.contains('4'));
        assert!(text.contains('6'));
        assert!(text.contains("24"));
    }

    #[tokio::test]
    async fn test_disabled_tutor_is_offline() {
        let settings = TutorSettings {
            enabled: false,
            ..TutorSettings::default()
        };
        let tutor = Tutor::from_settings(&settings);
        assert!(!tutor.is_online());
        assert!(matches!(
            tutor.explain(fact(2, 3)).await,
            Err(TutorError::Disabled)
        ));
    }
}
