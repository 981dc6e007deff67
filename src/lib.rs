//! Coachmatch - trainer-client compatibility matching for a fitness marketplace
//!
//! This library computes deterministic 0-100 compatibility scores between a
//! client's survey preferences and a pool of trainer profiles: normalize both
//! sides, score six independent dimensions, aggregate with configurable
//! weights, and rank into tiered match views. The scorer is pure and
//! synchronous; the HTTP layer is a thin stateless shell around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{EngagementStage, Matcher, ScoringPolicy};
pub use crate::models::{
    ClientPreferences, FindMatchesRequest, FindMatchesResponse, MatchResult, MatchTier,
    ScoringWeights, TierThresholds, TrainerProfile,
};
