use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// How a candidate applies. Wire strings follow the reply schema ("Presencial",
/// "Oficial"); the English spellings are accepted too. Anything else is kept
/// verbatim so the client can still show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationMethod {
    InPerson,
    OfficialPortal,
    Other(String),
}

impl Default for ApplicationMethod {
    fn default() -> Self {
        ApplicationMethod::Other(String::new())
    }
}

impl From<String> for ApplicationMethod {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "presencial" | "in-person" => ApplicationMethod::InPerson,
            "oficial" | "official-portal" | "official" => ApplicationMethod::OfficialPortal,
            _ => ApplicationMethod::Other(raw),
        }
    }
}

impl From<ApplicationMethod> for String {
    fn from(method: ApplicationMethod) -> Self {
        match method {
            ApplicationMethod::InPerson => "Presencial".to_string(),
            ApplicationMethod::OfficialPortal => "Oficial".to_string(),
            ApplicationMethod::Other(raw) => raw,
        }
    }
}

/// Hiring urgency as reported by the model ("Alta" | "Media").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Urgency {
    High,
    Medium,
    Other(String),
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Other(String::new())
    }
}

impl From<String> for Urgency {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "alta" | "high" => Urgency::High,
            "media" | "medium" => Urgency::Medium,
            _ => Urgency::Other(raw),
        }
    }
}

impl From<Urgency> for String {
    fn from(urgency: Urgency) -> Self {
        match urgency {
            Urgency::High => "Alta".to_string(),
            Urgency::Medium => "Media".to_string(),
            Urgency::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A job lead produced by the model. Never mutated after interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOpportunity {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub company_name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub address: String,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_info: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub application_method: ApplicationMethod,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub urgency: Urgency,
    #[serde(default, deserialize_with = "lenient::seq_of")]
    pub requirements: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub coords: Option<LatLng>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub official_link: Option<String>,
}

impl JobOpportunity {
    pub fn is_in_person(&self) -> bool {
        self.application_method == ApplicationMethod::InPerson
    }
}
