use serde::{Deserialize, Serialize};

use crate::core::dimensions::Dimension;
use crate::models::domain::{MatchResult, MatchTier};

/// Response for the find-matches endpoint: the three ranked views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    #[serde(rename = "matchedTrainers")]
    pub matched_trainers: Vec<MatchResult>,
    #[serde(rename = "topMatches")]
    pub top_matches: Vec<MatchResult>,
    #[serde(rename = "goodMatches")]
    pub good_matches: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// One dimension's line in an explain response.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionEntry {
    pub dimension: Dimension,
    pub weight: f64,
    pub score: f64,
    pub reason: Option<String>,
}

/// Per-dimension breakdown for a single client/trainer pair.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainMatchResponse {
    #[serde(rename = "trainerId")]
    pub trainer_id: String,
    pub score: u8,
    pub tier: MatchTier,
    pub dimensions: Vec<DimensionEntry>,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
