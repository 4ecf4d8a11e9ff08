//! Axum route handlers for profile submission.

use axum::{extract::State, Json};
use tracing::error;

use crate::errors::{AppError, SYNC_FAILED_MESSAGE};
use crate::models::profile::UserProfile;
use crate::solon::interpreter::SolonResults;
use crate::solon::synchronize;
use crate::state::AppState;

/// POST /api/v1/profile
///
/// Validates the profile, runs one synchronization and stores the outcome in
/// the session. Rejected with 409 while another submission is loading.
///
/// The synchronization runs in its own task and records its outcome there, so
/// a client that disconnects mid-call never leaves the session loading.
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<SolonResults>, AppError> {
    profile.validate().map_err(AppError::Validation)?;

    // The lock is released before the model call so reads stay responsive.
    let ticket = state.session.lock().await.begin_submission(profile.clone())?;

    let session = state.session.clone();
    let task = tokio::spawn(async move {
        let outcome = synchronize(&profile, state.llm.as_ref(), state.clock.as_ref()).await;
        let recorded = match &outcome {
            Ok(results) => Ok(results.clone()),
            Err(_) => Err(SYNC_FAILED_MESSAGE.to_string()),
        };
        state.session.lock().await.complete(ticket, recorded);
        outcome
    });

    match task.await {
        Ok(outcome) => outcome.map(Json),
        Err(e) => {
            error!("Synchronization task aborted: {e}");
            session
                .lock()
                .await
                .complete(ticket, Err(SYNC_FAILED_MESSAGE.to_string()));
            Err(AppError::Llm(format!("Synchronization task aborted: {e}")))
        }
    }
}
