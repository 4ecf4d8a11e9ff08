//! Tolerant deserializers for model-produced JSON.
//!
//! Nothing the model emits is trusted to have the right type. A field that
//! does not fit its Rust type falls back to its empty value instead of failing
//! the whole reply.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Any value that does not fit `T` becomes `T::default()`.
/// Pair with `#[serde(default)]` so missing fields take the same path.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the elements that fit `T` and drops the rest. A non-array is empty.
pub fn seq_of<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
