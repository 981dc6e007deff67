// Core algorithm exports
pub mod dimensions;
pub mod engagement;
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use dimensions::{Dimension, DimensionScore, ScoringPolicy, NEUTRAL_SCORE};
pub use engagement::EngagementStage;
pub use matcher::{MatchOutcome, Matcher};
pub use normalize::{normalize_client, normalize_trainer, ClientAttributes, TrainerAttributes};
pub use scoring::{score_pair, DimensionBreakdown, ScoreBreakdown};
