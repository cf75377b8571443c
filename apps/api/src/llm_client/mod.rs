/// LLM Client: the single point of entry for generative-text calls.
///
/// No other module may call the Gemini API directly; roadmap generation depends
/// on the `TextGenerator` trait so tests can substitute a scripted model.
///
/// One request per call: no retry, no streaming, no timeout beyond reqwest's defaults.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const TEMPERATURE: f32 = 0.7;
pub const TOP_K: u32 = 40;
pub const TOP_P: f32 = 0.95;
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error: {message}")]
    Api { status: u16, message: String },

    #[error("No response from Gemini API")]
    EmptyContent,
}

/// Produces free-form text for a single prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// Gemini `generateContent` client with fixed decoding parameters.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        // Error bodies are not always JSON; an unreadable body still yields a message.
        let parsed: GenerateContentResponse = serde_json::from_str(&body).unwrap_or_default();

        if !status.is_success() {
            let message = parsed
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = parsed.text().ok_or(LlmError::EmptyContent)?;
        debug!("Gemini call succeeded: {} chars generated", text.len());

        Ok(text.to_string())
    }
}
