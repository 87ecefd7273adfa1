/// LLM Client: the single point of entry for all Gemini API calls.
///
/// No other module may call the Gemini API directly. Handlers receive an
/// `Arc<dyn TextGenerator>` through `AppState`, so tests can swap in a mock.
///
/// Model: gemini-2.0-flash (hardcoded, do not make configurable)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
pub mod mock;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all LLM calls.
pub const MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Result<String, LlmError> {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return Err(LlmError::Blocked(reason.to_string()));
        }

        let candidate = self.candidates.first().ok_or(LlmError::EmptyContent)?;
        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(LlmError::Blocked("SAFETY".to_string()));
        }

        let text: String = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Pulls the human-readable message out of a Gemini error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Wraps the Gemini `generateContent` endpoint. One call per prompt, no retries.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Self::with_base_url(api_key, GEMINI_API_BASE.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, MODEL)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(model = MODEL, prompt_len = prompt.len(), "Sending request to Gemini API");

        let response = self
            .client
            .post(self.api_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let api_response: GenerateContentResponse = response.json().await?;
        let usage = api_response.usage_metadata.as_ref();
        debug!(
            "Gemini call succeeded: input_tokens={:?}, output_tokens={:?}",
            usage.and_then(|u| u.prompt_token_count),
            usage.and_then(|u| u.candidates_token_count)
        );

        api_response.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    fn parse(value: Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    /// Serves `router` on an ephemeral port and returns its base URL.
    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_text_joins_parts_of_first_candidate() {
        let response = parse(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Hello "}, {"text": "world"}]},
                 "finishReason": "STOP"},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }));
        assert_eq!(response.text().unwrap(), "Hello world");
    }

    #[test]
    fn test_text_errors_without_candidates() {
        let response = parse(json!({"candidates": []}));
        assert!(matches!(response.text(), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_text_errors_on_blocked_prompt() {
        let response = parse(json!({"promptFeedback": {"blockReason": "OTHER"}}));
        match response.text() {
            Err(LlmError::Blocked(reason)) => assert_eq!(reason, "OTHER"),
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn test_text_errors_on_safety_stop() {
        let response = parse(json!({
            "candidates": [{"content": {"parts": []}, "finishReason": "SAFETY"}]
        }));
        assert!(matches!(response.text(), Err(LlmError::Blocked(_))));
    }

    #[test]
    fn test_api_error_message_prefers_structured_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body.to_string()), "API key not valid");
        assert_eq!(api_error_message("bad gateway".to_string()), "bad gateway");
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_returns_text() {
        let router = Router::new().route(
            "/models/*action",
            post(|Path(action): Path<String>, headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(action, "gemini-2.0-flash:generateContent");
                assert_eq!(headers["x-goog-api-key"], "test-key");
                let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap().to_string();
                Json(json!({
                    "candidates": [{"content": {"parts": [{"text": format!("echo: {prompt}")}]}}],
                    "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 4}
                }))
            }),
        );
        let base = spawn_stub(router).await;
        let client = GeminiClient::with_base_url("test-key".into(), base).unwrap();

        let text = client.generate("summarize this").await.unwrap();
        assert_eq!(text, "echo: summarize this");
    }

    #[tokio::test]
    async fn test_generate_surfaces_api_errors() {
        let router = Router::new().route(
            "/models/*action",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({"error": {"message": "Resource has been exhausted"}})),
                )
            }),
        );
        let base = spawn_stub(router).await;
        let client = GeminiClient::with_base_url("k".into(), base).unwrap();

        match client.generate("p").await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "Resource has been exhausted");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
