// Synchronization pipeline: profile → composed request → one model call →
// interpreted results. All model calls go through llm_client.

pub mod composer;
pub mod handlers;
pub mod interpreter;
pub mod prompts;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::clock::Clock;
use crate::errors::AppError;
use crate::llm_client::ModelBackend;
use crate::models::profile::UserProfile;
use crate::solon::composer::compose_request;
use crate::solon::interpreter::{interpret, SolonResults};

/// Runs one synchronization for `profile`. No retries.
#[instrument(skip_all, fields(sync_id = %Uuid::new_v4(), location = %profile.location))]
pub async fn synchronize(
    profile: &UserProfile,
    model: &dyn ModelBackend,
    clock: &dyn Clock,
) -> Result<SolonResults, AppError> {
    let request = compose_request(profile, clock.now());

    let reply = model
        .generate(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Synchronization call failed: {e}")))?;

    let results = interpret(&reply)?;

    info!(
        profile_jobs = results.profile_jobs.len(),
        nearby_jobs = results.nearby_jobs.len(),
        has_investment = results.investment.is_some(),
        sources = results.sources.len(),
        "Synchronization complete"
    );

    Ok(results)
}
