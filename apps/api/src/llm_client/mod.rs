//! LLM Client — the single point of entry for all Gemini API calls in Sólon.
//!
//! ARCHITECTURAL RULE: No other module may call the model API directly.
//! All model interactions MUST go through this module.
//!
//! Model: gemini-2.5-flash (the maps grounding tool is only offered on the 2.5 series)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;
#[cfg(test)]
pub mod stub;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// The model used for every synchronization.
pub const MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned no candidates")]
    EmptyContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Caller-facing request / reply
// ────────────────────────────────────────────────────────────────────────────

/// Retrieval tools the model may consult while answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundingTool {
    WebSearch,
    Maps,
}

/// Point used to bias maps retrieval towards the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RetrievalPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything needed for one `generateContent` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub temperature: f32,
    pub tools: Vec<GroundingTool>,
    pub location_bias: Option<RetrievalPoint>,
}

/// A source the model grounded its answer on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<ChunkSource>,
    #[serde(default)]
    pub maps: Option<ChunkSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChunkSource {
    #[serde(default)]
    pub uri: Option<String>,
}

impl GroundingChunk {
    /// Web URI first, maps URI otherwise. Empty strings count as absent.
    pub fn uri(&self) -> Option<&str> {
        fn non_empty(source: &Option<ChunkSource>) -> Option<&str> {
            source
                .as_ref()
                .and_then(|s| s.uri.as_deref())
                .filter(|uri| !uri.is_empty())
        }
        non_empty(&self.web).or_else(|| non_empty(&self.maps))
    }
}

/// Text of the first candidate plus its grounding chunks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelReply {
    pub text: String,
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// Anything that can answer a `ModelRequest`.
///
/// Carried in `AppState` as `Arc<dyn ModelBackend>`.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn generate(&self, request: &ModelRequest) -> Result<ModelReply, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    tools: Vec<WireTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<ToolConfig>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct EmptyObject {}

#[derive(Debug, Serialize)]
enum WireTool {
    #[serde(rename = "googleSearch")]
    GoogleSearch(EmptyObject),
    #[serde(rename = "googleMaps")]
    GoogleMaps(EmptyObject),
}

impl From<GroundingTool> for WireTool {
    fn from(tool: GroundingTool) -> Self {
        match tool {
            GroundingTool::WebSearch => WireTool::GoogleSearch(EmptyObject {}),
            GroundingTool::Maps => WireTool::GoogleMaps(EmptyObject {}),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: RetrievalPoint,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

impl From<GenerateContentResponse> for ModelReply {
    fn from(response: GenerateContentResponse) -> Self {
        let Some(candidate) = response.candidates.into_iter().next() else {
            return ModelReply::default();
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| part.thought != Some(true))
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        ModelReply {
            text,
            grounding_chunks: candidate
                .grounding_metadata
                .map(|m| m.grounding_chunks)
                .unwrap_or_default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single Gemini client used by all services in Sólon.
/// One request per call: no retries, no backoff.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key,
            endpoint: format!(
                "{}/v1beta/models/{MODEL}:generateContent",
                base_url.trim_end_matches('/')
            ),
        })
    }
}

#[async_trait]
impl ModelBackend for GeminiClient {
    async fn generate(&self, request: &ModelRequest) -> Result<ModelReply, LlmError> {
        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            tools: request.tools.iter().copied().map(WireTool::from).collect(),
            tool_config: request.location_bias.map(|lat_lng| ToolConfig {
                retrieval_config: RetrievalConfig { lat_lng },
            }),
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response: GenerateContentResponse = response.json().await?;

        if response.candidates.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        if let Some(usage) = &response.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={}, candidate_tokens={}, finish_reason={:?}",
                usage.prompt_token_count,
                usage.candidates_token_count,
                response.candidates[0].finish_reason
            );
        }

        Ok(ModelReply::from(response))
    }
}
