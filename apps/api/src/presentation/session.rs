//! The single in-memory session: submitted profile, synchronization phase and
//! the screen the client is looking at.
//!
//! Phases: `AwaitingProfile` → `Loading` → `Ready` | `Failed`. A reset returns
//! to `AwaitingProfile` and orphans any in-flight synchronization; its outcome
//! is discarded when it lands because its ticket no longer matches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::Clock;
use crate::models::investment::{InvestmentStrategy, SectorPlan};
use crate::models::profile::UserProfile;
use crate::presentation::cards::{build_card, is_favorable_time, JobCard, EMPTY_JOBS_MESSAGE};
use crate::presentation::map::{build_map, MapView};
use crate::solon::interpreter::SolonResults;

pub const LOADING_MESSAGE: &str = "Sincronizando Destinos...";
pub const REMINDER_NOTICE: &str = "Toda la información presentada ha sido sincronizada a partir \
    de patrones de mercado recientes. Corrobora telefónicamente las vacantes y direcciones antes \
    de iniciar cualquier traslado físico.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Selection,
    Jobs,
    Investment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobTab {
    #[default]
    Profile,
    Map,
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    AwaitingProfile,
    Loading,
    Ready(SolonResults),
    Failed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a synchronization is already in progress")]
    Busy,

    #[error("no synchronized results to display")]
    NoResults,
}

/// Identifies one submission so stale outcomes can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Session {
    profile: Option<UserProfile>,
    phase: Phase,
    screen: Screen,
    job_tab: JobTab,
    epoch: u64,
}

impl Session {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Starts a submission. Rejected while another one is loading.
    pub fn begin_submission(&mut self, profile: UserProfile) -> Result<Ticket, SessionError> {
        if self.is_loading() {
            return Err(SessionError::Busy);
        }
        self.epoch += 1;
        self.profile = Some(profile);
        self.phase = Phase::Loading;
        Ok(Ticket(self.epoch))
    }

    /// Records the outcome of the submission identified by `ticket`.
    /// Returns false when the session moved on and the outcome was dropped.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<SolonResults, String>) -> bool {
        if ticket != Ticket(self.epoch) || !self.is_loading() {
            return false;
        }
        self.phase = match outcome {
            Ok(results) => {
                self.screen = Screen::Selection;
                Phase::Ready(results)
            }
            Err(message) => Phase::Failed(message),
        };
        true
    }

    /// Switches screens. Only meaningful once results are in.
    pub fn select(&mut self, screen: Screen, job_tab: Option<JobTab>) -> Result<(), SessionError> {
        if !matches!(self.phase, Phase::Ready(_)) {
            return Err(SessionError::NoResults);
        }
        self.screen = screen;
        if let Some(tab) = job_tab {
            self.job_tab = tab;
        }
        Ok(())
    }

    /// Back to an empty form. Any in-flight submission is abandoned.
    pub fn reset(&mut self) {
        let epoch = self.epoch + 1;
        *self = Session {
            epoch,
            ..Session::default()
        };
    }

    pub fn snapshot(&self, clock: &dyn Clock) -> SessionSnapshot {
        match &self.phase {
            Phase::AwaitingProfile => SessionSnapshot::AwaitingProfile,
            Phase::Loading => SessionSnapshot::Loading {
                message: LOADING_MESSAGE.to_string(),
            },
            Phase::Failed(message) => SessionSnapshot::Failed {
                message: message.clone(),
            },
            Phase::Ready(results) => {
                let now = clock.now();
                SessionSnapshot::Ready {
                    screen: self.screen,
                    job_tab: self.job_tab,
                    local_time: now.format("%H:%M:%S").to_string(),
                    view: self.screen_view(results, is_favorable_time(now)),
                    reminder: (self.screen != Screen::Selection)
                        .then(|| REMINDER_NOTICE.to_string()),
                    sources: results.sources.clone(),
                }
            }
        }
    }

    fn screen_view(&self, results: &SolonResults, favorable_time: bool) -> ScreenView {
        match (self.screen, self.job_tab) {
            (Screen::Selection, _) => ScreenView::Selection {
                job_count: results.profile_jobs.len(),
                investment_available: results.investment.is_some(),
            },
            (Screen::Jobs, JobTab::Profile) => ScreenView::JobList {
                cards: results
                    .profile_jobs
                    .iter()
                    .map(|job| build_card(job, favorable_time))
                    .collect(),
                empty_message: results
                    .profile_jobs
                    .is_empty()
                    .then(|| EMPTY_JOBS_MESSAGE.to_string()),
            },
            (Screen::Jobs, JobTab::Map) => {
                ScreenView::JobMap(build_map(&results.nearby_jobs, self.profile.as_ref()))
            }
            (Screen::Investment, _) => match &results.investment {
                Some(strategy) => ScreenView::Investment(InvestmentView::from(strategy)),
                None => ScreenView::InvestmentUnavailable,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentView {
    pub initial_capital: f64,
    pub methodology: String,
    pub sectors: Vec<SectorPlan>,
    /// Whether the model delivered the requested 4×4 layout.
    pub complete: bool,
}

impl From<&InvestmentStrategy> for InvestmentView {
    fn from(strategy: &InvestmentStrategy) -> Self {
        Self {
            initial_capital: strategy.initial_capital,
            methodology: strategy.methodology.clone(),
            sectors: strategy.sectors.clone(),
            complete: strategy.has_expected_shape(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScreenView {
    Selection {
        #[serde(rename = "jobCount")]
        job_count: usize,
        #[serde(rename = "investmentAvailable")]
        investment_available: bool,
    },
    JobList {
        cards: Vec<JobCard>,
        #[serde(rename = "emptyMessage", skip_serializing_if = "Option::is_none")]
        empty_message: Option<String>,
    },
    JobMap(MapView),
    Investment(InvestmentView),
    /// The reply carried no strategy; nothing is rendered for this screen.
    InvestmentUnavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SessionSnapshot {
    AwaitingProfile,
    Loading {
        message: String,
    },
    Failed {
        message: String,
    },
    Ready {
        screen: Screen,
        #[serde(rename = "jobTab")]
        job_tab: JobTab,
        #[serde(rename = "localTime")]
        local_time: String,
        view: ScreenView,
        #[serde(skip_serializing_if = "Option::is_none")]
        reminder: Option<String>,
        sources: Vec<String>,
    },
}
