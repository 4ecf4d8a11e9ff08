//! Axum route handlers for the session API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::presentation::session::{JobTab, Screen, SessionSnapshot};
use crate::state::AppState;

pub const SHARE_TITLE: &str = "Portal Sólon";
pub const SHARE_TEXT: &str =
    "Vacantes de aplicación directa y una hoja de ruta para micro-capitales.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectViewRequest {
    pub view: Screen,
    #[serde(default)]
    pub job_tab: Option<JobTab>,
}

#[derive(Debug, Serialize)]
pub struct ShareInfo {
    pub url: String,
    pub title: String,
    pub text: String,
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(session.snapshot(state.clock.as_ref()))
}

/// POST /api/v1/session/view
///
/// Switches between the selection, jobs and investment screens.
pub async fn handle_select_view(
    State(state): State<AppState>,
    Json(request): Json<SelectViewRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = state.session.lock().await;
    session.select(request.view, request.job_tab)?;
    Ok(Json(session.snapshot(state.clock.as_ref())))
}

/// POST /api/v1/session/reset
///
/// Equivalent of reloading the page: clears the profile and results.
pub async fn handle_reset_session(State(state): State<AppState>) -> StatusCode {
    let mut session = state.session.lock().await;
    if session.is_loading() {
        info!("Session reset while a synchronization was in flight; its outcome will be dropped");
    }
    session.reset();
    StatusCode::NO_CONTENT
}

/// GET /api/v1/share
pub async fn handle_share(State(state): State<AppState>) -> Json<ShareInfo> {
    Json(ShareInfo {
        url: state.config.public_url.clone(),
        title: SHARE_TITLE.to_string(),
        text: SHARE_TEXT.to_string(),
    })
}
