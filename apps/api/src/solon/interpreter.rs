//! Response Interpreter — finds the JSON object in a free-text model reply and
//! maps it onto `SolonResults`.
//!
//! The locator counts braces outside string literals instead of matching the
//! widest `{...}` span, so prose or a second object after the payload does not
//! corrupt it. A fenced code block, when present, is searched first.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::llm_client::ModelReply;
use crate::models::investment::InvestmentStrategy;
use crate::models::lenient;
use crate::models::opportunity::JobOpportunity;

/// Status line attached to every successful synchronization.
pub const SYNC_COMPLETE_TEXT: &str = "Sincronización completa.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpretError {
    #[error("no JSON object found in model reply")]
    NoJsonObject,

    #[error("model reply JSON is malformed: {0}")]
    Malformed(String),
}

/// The payload as the model wrote it. Every field tolerates absence.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolonPayload {
    #[serde(default, deserialize_with = "lenient::seq_of")]
    profile_jobs: Vec<JobOpportunity>,
    #[serde(default, deserialize_with = "lenient::seq_of")]
    nearby_jobs: Vec<JobOpportunity>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    investment: Option<InvestmentStrategy>,
}

/// What a synchronization hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolonResults {
    pub profile_jobs: Vec<JobOpportunity>,
    pub nearby_jobs: Vec<JobOpportunity>,
    pub investment: Option<InvestmentStrategy>,
    pub text: String,
    pub sources: Vec<String>,
}

/// Interprets a model reply. Either everything parses or nothing is returned.
pub fn interpret(reply: &ModelReply) -> Result<SolonResults, InterpretError> {
    let object = locate_json_object(&reply.text)?;

    let payload: SolonPayload = serde_json::from_value(Value::Object(object))
        .map_err(|e| InterpretError::Malformed(e.to_string()))?;

    if let Some(investment) = &payload.investment {
        if !investment.has_expected_shape() {
            warn!(
                sectors = investment.sectors.len(),
                "investment strategy does not have the requested 4x4 shape"
            );
        }
    }

    Ok(SolonResults {
        profile_jobs: payload.profile_jobs,
        nearby_jobs: payload.nearby_jobs,
        investment: payload.investment,
        text: SYNC_COMPLETE_TEXT.to_string(),
        sources: reply
            .grounding_chunks
            .iter()
            .filter_map(|chunk| chunk.uri())
            .map(String::from)
            .collect(),
    })
}

/// Returns the first JSON object embedded in `text`.
///
/// A closed fenced code block that contains a `{` decides the outcome on its
/// own. Otherwise the whole text is scanned. Brace spans that cannot open a
/// JSON object (`{nombre}`) are skipped; the first one that can is the
/// payload, and if it does not parse the reply is `Malformed`. A reply with no
/// `{` at all is `NoJsonObject`.
pub fn locate_json_object(text: &str) -> Result<Map<String, Value>, InterpretError> {
    if let Some(body) = fenced_body(text) {
        match first_object(body) {
            Err(InterpretError::NoJsonObject) => {}
            decided => return decided,
        }
    }
    first_object(text)
}

fn first_object(text: &str) -> Result<Map<String, Value>, InterpretError> {
    let bytes = text.as_bytes();
    let mut saw_brace = false;
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find('{') {
        let start = cursor + found;
        saw_brace = true;

        // Everything after an unclosed brace is nested inside it.
        let Some(end) = balanced_end(bytes, start) else {
            return Err(InterpretError::Malformed("unbalanced braces".to_string()));
        };

        if !opens_object(&bytes[start + 1..=end]) {
            cursor = end + 1;
            continue;
        }

        return match serde_json::from_str::<Value>(&text[start..=end]) {
            Ok(Value::Object(object)) => Ok(object),
            Ok(_) => Err(InterpretError::Malformed("not a JSON object".to_string())),
            Err(e) => Err(InterpretError::Malformed(e.to_string())),
        };
    }

    if saw_brace {
        Err(InterpretError::Malformed("no object candidate".to_string()))
    } else {
        Err(InterpretError::NoJsonObject)
    }
}

/// True when the bytes after a `{` start like an object body: a key or `}`.
fn opens_object(rest: &[u8]) -> bool {
    matches!(
        rest.iter().find(|b| !b.is_ascii_whitespace()),
        Some(b'"') | Some(b'}')
    )
}

/// Index of the `}` closing the `{` at `start`, skipping braces in strings.
fn balanced_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Body of the first ```json (or bare ```) fence, if it is closed.
fn fenced_body(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after = &text[open + 3..];
    // Skip the info string ("json", "JSON", ...) up to the end of its line.
    let body_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after[body_start..];
    let close = body.find("```")?;
    Some(body[..close].trim())
}
