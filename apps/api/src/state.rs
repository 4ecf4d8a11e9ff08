use std::sync::Arc;

use tokio::sync::Mutex;

use crate::clock::Clock;
use crate::config::Config;
use crate::llm_client::ModelBackend;
use crate::presentation::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. Default: GeminiClient. Tests swap in a stub.
    pub llm: Arc<dyn ModelBackend>,
    pub clock: Arc<dyn Clock>,
    /// The one active session; lives as long as the process.
    pub session: Arc<Mutex<Session>>,
    pub config: Config,
}
