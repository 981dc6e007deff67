// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetFlexibility, ClientPreferences, ExperienceLevel, LocationPreference, MatchResult,
    MatchTier, PackageType, ScoringWeights, StartTimeline, TierThresholds, TrainerProfile,
    WaitlistPreference,
};
pub use requests::{ExplainMatchRequest, FindMatchesRequest};
pub use responses::{
    DimensionEntry, ErrorResponse, ExplainMatchResponse, FindMatchesResponse, HealthResponse,
};
