use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::engagement::EngagementStage;
use crate::models::{ClientPreferences, TrainerProfile};

/// Request to find matches for one client against a trainer pool.
///
/// The pool and the client record are supplied by the caller; this service
/// holds no state of its own.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub client: ClientPreferences,
    #[serde(default)]
    pub trainers: Vec<TrainerProfile>,
    /// Trainer id -> current engagement stage for this client. Trainers
    /// engaged beyond browsing are dropped from the pool.
    #[serde(default)]
    pub engagements: HashMap<String, EngagementStage>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}

/// Request for a per-dimension score breakdown of a single pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainMatchRequest {
    pub client: ClientPreferences,
    pub trainer: TrainerProfile,
}
