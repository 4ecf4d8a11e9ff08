mod clock;
mod config;
mod errors;
mod llm_client;
mod models;
mod presentation;
mod routes;
mod solon;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clock::SystemClock;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::presentation::session::Session;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sólon API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize model client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        &config.gemini_base_url,
        config.gemini_timeout,
    )?;
    match config.gemini_timeout {
        Some(timeout) => info!(
            "Model client initialized (model: {}, timeout: {}s)",
            llm_client::MODEL,
            timeout.as_secs()
        ),
        None => info!(
            "Model client initialized (model: {}, no timeout)",
            llm_client::MODEL
        ),
    }

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        clock: Arc::new(SystemClock),
        session: Arc::new(Mutex::new(Session::default())),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to PUBLIC_URL once the client is hosted

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");
    info!("Share URL: {}", config.public_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
