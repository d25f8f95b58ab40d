//! Gemini `generateContent` client.

use galaxy_model::Fact;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};

use crate::config::TutorSettings;
use crate::error::{Result, TutorError};
use crate::prompt::{SYSTEM_INSTRUCTION, prompt_for};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("math-galaxy/", env!("CARGO_PKG_VERSION"));

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for one model on the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from settings, reading the key from the environment.
    pub fn from_settings(settings: &TutorSettings) -> Result<Self> {
        let api_key = settings
            .api_key()
            .ok_or_else(|| TutorError::MissingApiKey(settings.api_key_env.clone()))?;
        Self::new(settings, &api_key)
    }

    /// Build a client with an explicit key.
    pub fn new(settings: &TutorSettings, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| TutorError::MissingApiKey(settings.api_key_env.clone()))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| TutorError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    /// URL of the `generateContent` call.
    pub fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    /// Ask the model to explain `fact`.
    pub async fn explain(&self, fact: Fact) -> Result<String> {
        let url = self.url();
        tracing::debug!(%fact, model = %self.model, "requesting explanation");

        let body = GenerateContentRequest::for_fact(fact);
        let response = self.client.post(&url).json(&body).send().await?;
        let reply = self.handle_response(response).await?;

        reply.text()
    }

    /// Checks the HTTP status and parses the JSON body.
    async fn handle_response(&self, response: reqwest::Response) -> Result<GenerateContentResponse> {
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TutorError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TutorError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let reply: GenerateContentResponse = response.json().await?;
        Ok(reply)
    }
}

/// Pull `error.message` out of an error body, or return the body itself.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
}

impl GenerateContentRequest {
    fn for_fact(fact: Fact) -> Self {
        Self {
            contents: vec![Content::text(prompt_for(fact))],
            system_instruction: Content::text(SYSTEM_INSTRUCTION.to_string()),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(text: String) -> Self {
        Self {
            parts: vec![Part { text: Some(text) }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(self) -> Result<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(TutorError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
