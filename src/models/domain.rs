use serde::{Deserialize, Serialize};

/// Where a client wants to train, or a mode in which a trainer delivers sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationPreference {
    Online,
    InPerson,
    Hybrid,
}

/// Package shapes a trainer can offer and a client can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    SingleSession,
    SessionPack,
    Monthly,
    OngoingCoaching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartTimeline {
    Immediately,
    WithinMonth,
    Exploring,
}

/// How strictly the client's budget range should be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetFlexibility {
    Strict,
    SomewhatFlexible,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitlistPreference {
    JoinWaitlist,
    KeepSearching,
}

/// Client survey preferences as captured by the intake flow.
///
/// Every field is optional on the wire: a client may invoke matching before
/// completing the survey, so deserialization must accept any subset. The
/// normalizer substitutes neutral defaults for whatever is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientPreferences {
    #[serde(rename = "clientId", default)]
    pub client_id: String,
    #[serde(rename = "primaryGoals", default)]
    pub primary_goals: Vec<String>,
    #[serde(rename = "secondaryGoals", default)]
    pub secondary_goals: Vec<String>,
    #[serde(rename = "trainingLocationPreference", default)]
    pub training_location_preference: Option<LocationPreference>,
    #[serde(rename = "openToVirtualCoaching", default)]
    pub open_to_virtual_coaching: Option<bool>,
    #[serde(rename = "preferredTrainingFrequency", default)]
    pub preferred_training_frequency: Option<u8>,
    #[serde(rename = "preferredTimeSlots", default)]
    pub preferred_time_slots: Vec<String>,
    #[serde(rename = "startTimeline", default)]
    pub start_timeline: Option<StartTimeline>,
    #[serde(rename = "preferredCoachingStyle", default)]
    pub preferred_coaching_style: Vec<String>,
    #[serde(rename = "motivationFactors", default)]
    pub motivation_factors: Vec<String>,
    #[serde(rename = "clientPersonalityType", default)]
    pub client_personality_type: Vec<String>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(rename = "preferredPackageType", default)]
    pub preferred_package_type: Option<PackageType>,
    #[serde(rename = "budgetRangeMin", default)]
    pub budget_range_min: Option<f64>,
    #[serde(rename = "budgetRangeMax", default)]
    pub budget_range_max: Option<f64>,
    #[serde(rename = "budgetFlexibility", default)]
    pub budget_flexibility: Option<BudgetFlexibility>,
    #[serde(rename = "waitlistPreference", default)]
    pub waitlist_preference: Option<WaitlistPreference>,
    #[serde(rename = "flexibleScheduling", default)]
    pub flexible_scheduling: Option<bool>,
}

/// Trainer profile as published in the marketplace. Read-only to the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "hourlyRate", default)]
    pub hourly_rate: Option<f64>,
    #[serde(rename = "trainingTypes", default)]
    pub training_types: Vec<LocationPreference>,
    #[serde(rename = "availabilitySlots", default)]
    pub availability_slots: Vec<String>,
    #[serde(rename = "coachingStyles", default)]
    pub coaching_styles: Vec<String>,
    #[serde(rename = "packageTypes", default)]
    pub package_types: Vec<PackageType>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "reviewCount", default)]
    pub review_count: Option<u32>,
    #[serde(rename = "isPublished", default = "default_true")]
    pub is_published: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TrainerProfile {
    /// Rating used for ranking tie-breaks, defaulting to 0 for unrated trainers.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

fn default_true() -> bool {
    true
}

/// Compatibility tier derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Perfect,
    Great,
    Good,
    Potential,
    Unranked,
}

/// Scored trainer returned to callers. Derived per invocation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "trainerId")]
    pub trainer_id: String,
    pub name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    pub rating: Option<f64>,
    pub score: u8,
    pub tier: MatchTier,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Weights applied to the six scoring dimensions. Should sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub goals: f64,
    pub location: f64,
    pub budget: f64,
    pub schedule: f64,
    pub personality: f64,
    pub package: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            goals: 0.30,
            location: 0.15,
            budget: 0.20,
            schedule: 0.15,
            personality: 0.10,
            package: 0.10,
        }
    }
}

/// Score thresholds mapping an aggregate score to a tier.
///
/// Scores below `potential` are treated as unranked and dropped from results.
#[derive(Debug, Clone, Copy)]
pub struct TierThresholds {
    pub perfect: u8,
    pub great: u8,
    pub good: u8,
    pub potential: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            perfect: 80,
            great: 60,
            good: 40,
            potential: 20,
        }
    }
}

impl TierThresholds {
    pub fn tier_for(&self, score: u8) -> MatchTier {
        if score >= self.perfect {
            MatchTier::Perfect
        } else if score >= self.great {
            MatchTier::Great
        } else if score >= self.good {
            MatchTier::Good
        } else if score >= self.potential {
            MatchTier::Potential
        } else {
            MatchTier::Unranked
        }
    }
}
