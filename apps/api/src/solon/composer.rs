//! Request Composer — turns a submitted profile into the model request.

use chrono::{DateTime, FixedOffset};

use crate::llm_client::prompts::{fill_template, FENCED_JSON_ONLY};
use crate::llm_client::{GroundingTool, ModelRequest, RetrievalPoint};
use crate::models::profile::UserProfile;
use crate::solon::prompts::{SOLON_PROMPT_TEMPLATE, SOLON_SYSTEM_TEMPLATE, SOLON_TEMPERATURE};

/// Builds the synchronization request for `profile`.
///
/// Profile text is interpolated verbatim. `_now` is accepted so callers pass
/// the session clock, but the instruction body does not depend on it.
pub fn compose_request(profile: &UserProfile, _now: DateTime<FixedOffset>) -> ModelRequest {
    let system_instruction = fill_template(
        SOLON_SYSTEM_TEMPLATE,
        &[("json_only", FENCED_JSON_ONLY), ("location", profile.location.as_str())],
    );

    let prompt = fill_template(
        SOLON_PROMPT_TEMPLATE,
        &[
            ("location", profile.location.as_str()),
            ("country", profile.country.as_str()),
            ("skills", profile.skills.as_str()),
        ],
    );

    ModelRequest {
        system_instruction,
        prompt,
        temperature: SOLON_TEMPERATURE,
        tools: vec![GroundingTool::WebSearch, GroundingTool::Maps],
        location_bias: profile.coordinates.map(|c| RetrievalPoint {
            latitude: c.latitude,
            longitude: c.longitude,
        }),
    }
}
