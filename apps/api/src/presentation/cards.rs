//! Job list view models.

use std::ops::RangeInclusive;

use chrono::{DateTime, FixedOffset, Timelike};
use serde::Serialize;

use crate::models::opportunity::{ApplicationMethod, JobOpportunity, Urgency};

/// Local hours (inclusive) in which walking in is recommended.
pub const FAVORABLE_HOURS: RangeInclusive<u32> = 9..=18;

pub const RECEPTION_TIP: &str = "Tip: Presentar CV en recepción preguntando por vacantes.";
pub const EMPTY_JOBS_MESSAGE: &str =
    "No se detectaron vacantes de aplicación directa en este ciclo de 5 días.";

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CardAction {
    OpenInMaps { url: String, tip: String },
    OfficialPortal { url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub company_name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    pub application_method: ApplicationMethod,
    pub urgency: Urgency,
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<CardAction>,
    /// In-person lead during favorable hours: recommend visiting now.
    pub open_now: bool,
}

pub fn is_favorable_time(now: DateTime<FixedOffset>) -> bool {
    FAVORABLE_HOURS.contains(&now.hour())
}

/// Google Maps search link for a free-text query.
pub fn maps_search_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{MAPS_SEARCH_BASE}{encoded}")
}

pub fn build_card(job: &JobOpportunity, favorable_time: bool) -> JobCard {
    let action = match &job.application_method {
        ApplicationMethod::InPerson => Some(CardAction::OpenInMaps {
            url: maps_search_url(&format!("{} {}", job.company_name, job.address)),
            tip: RECEPTION_TIP.to_string(),
        }),
        _ => job
            .official_link
            .as_ref()
            .filter(|link| !link.trim().is_empty())
            .map(|url| CardAction::OfficialPortal { url: url.clone() }),
    };

    JobCard {
        company_name: job.company_name.clone(),
        address: job.address.clone(),
        contact_info: job.contact_info.clone().filter(|c| !c.trim().is_empty()),
        application_method: job.application_method.clone(),
        urgency: job.urgency.clone(),
        requirements: job.requirements.clone(),
        action,
        open_now: favorable_time && job.is_in_person(),
    }
}
