use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Number of sectors the reply is asked to contain.
pub const EXPECTED_SECTORS: usize = 4;
/// Number of tips per sector the reply is asked to contain.
pub const TIPS_PER_SECTOR: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub advice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorPlan {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub sector: String,
    /// Icon class name, e.g. "fa-brands fa-bitcoin".
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient::seq_of")]
    pub tips: Vec<Tip>,
}

/// Micro-capital roadmap. The 4×4 shape is requested but never enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentStrategy {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub initial_capital: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub methodology: String,
    #[serde(default, deserialize_with = "lenient::seq_of")]
    pub sectors: Vec<SectorPlan>,
}

impl InvestmentStrategy {
    pub fn has_expected_shape(&self) -> bool {
        self.sectors.len() == EXPECTED_SECTORS
            && self.sectors.iter().all(|s| s.tips.len() == TIPS_PER_SECTOR)
    }
}
