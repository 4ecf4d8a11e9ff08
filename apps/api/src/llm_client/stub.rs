//! In-process `ModelBackend` for handler and pipeline tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{GroundingChunk, LlmError, ModelBackend, ModelReply, ModelRequest};

/// Replies with canned text, or fails like an unreachable API when `text` is `None`.
pub struct StubModel {
    text: Option<String>,
    grounding_chunks: Vec<GroundingChunk>,
    delay: Option<Duration>,
    pub requests: Mutex<Vec<ModelRequest>>,
}

impl StubModel {
    pub fn replying(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            grounding_chunks: Vec::new(),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            text: None,
            grounding_chunks: Vec::new(),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_grounding(mut self, chunks: Vec<GroundingChunk>) -> Self {
        self.grounding_chunks = chunks;
        self
    }

    /// Holds every reply back for `delay`, like a slow grounded call.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn last_request(&self) -> Option<ModelRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ModelBackend for StubModel {
    async fn generate(&self, request: &ModelRequest) -> Result<ModelReply, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.text {
            Some(text) => Ok(ModelReply {
                text: text.clone(),
                grounding_chunks: self.grounding_chunks.clone(),
            }),
            None => Err(LlmError::Api {
                status: 503,
                message: "stub unavailable".to_string(),
            }),
        }
    }
}
