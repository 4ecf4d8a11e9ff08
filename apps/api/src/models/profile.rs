use serde::{Deserialize, Serialize};

pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The job-search context a user submits. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default = "default_country")]
    pub country: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: String,
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default = "default_sex")]
    pub sex: String,
    /// Present only when the client could read its position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

fn default_country() -> String {
    "México".to_string()
}

fn default_age() -> u32 {
    18
}

fn default_sex() -> String {
    "Otro".to_string()
}

impl UserProfile {
    /// Checks the constraints the submission form enforces.
    pub fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("location cannot be empty".to_string());
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(format!("age must be between {MIN_AGE} and {MAX_AGE}"));
        }
        Ok(())
    }
}
