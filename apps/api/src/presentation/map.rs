//! Proximity map view model.

use serde::Serialize;

use crate::models::opportunity::{JobOpportunity, LatLng, Urgency};
use crate::models::profile::UserProfile;
use crate::presentation::cards::maps_search_url;

/// Geographic center of México; used when the profile has no coordinates.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 23.6345,
    lng: -102.5528,
};
pub const DEFAULT_ZOOM: u8 = 13;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub position: LatLng,
    pub company_name: String,
    pub address: String,
    pub urgency: Urgency,
    pub directions_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
    /// Nearby jobs the model returned without coordinates.
    pub unplaced: usize,
}

pub fn build_map(jobs: &[JobOpportunity], profile: Option<&UserProfile>) -> MapView {
    let center = profile
        .and_then(|p| p.coordinates)
        .map(|c| LatLng {
            lat: c.latitude,
            lng: c.longitude,
        })
        .unwrap_or(DEFAULT_CENTER);

    let markers: Vec<MapMarker> = jobs
        .iter()
        .filter_map(|job| {
            job.coords.map(|position| MapMarker {
                position,
                company_name: job.company_name.clone(),
                address: job.address.clone(),
                urgency: job.urgency.clone(),
                directions_url: maps_search_url(&job.address),
            })
        })
        .collect();

    MapView {
        center,
        zoom: DEFAULT_ZOOM,
        unplaced: jobs.len() - markers.len(),
        markers,
    }
}
