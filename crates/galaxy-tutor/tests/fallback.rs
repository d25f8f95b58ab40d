//! The tutor must always have something to say.

use galaxy_model::{Fact, Multiplier, Table, facts_of};
use galaxy_tutor::{
    Explainer, Tutor, TutorError, TutorSettings, explain_or_fallback, fallback_explanation,
};

fn offline() -> Tutor {
    Tutor::from_settings(&TutorSettings {
        enabled: false,
        ..TutorSettings::default()
    })
}

#[tokio::test]
async fn offline_tutor_falls_back_for_every_fact() {
    let tutor = offline();
    for table in Table::all() {
        for fact in facts_of(table) {
            let text = explain_or_fallback(&tutor, fact).await;
            assert_eq!(text, fallback_explanation(fact));
            assert!(text.contains(&fact.product().to_string()));
        }
    }
}

#[tokio::test]
async fn missing_key_is_reported_as_such() {
    let settings = TutorSettings {
        api_key_env: "MATH_GALAXY_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
        ..TutorSettings::default()
    };
    // Only meaningful when the legacy variable is absent too.
    if std::env::var("API_KEY").is_ok() {
        return;
    }
    let tutor = Tutor::from_settings(&settings);
    assert!(!tutor.is_online());

    let fact = Fact::new(Table::new(9).unwrap(), Multiplier::new(9).unwrap());
    let error = tutor.explain(fact).await.unwrap_err();
    assert!(matches!(error, TutorError::MissingApiKey(_)));
}
