use serde::Serialize;

use crate::models::{LocationPreference, ScoringWeights};
use crate::core::normalize::{ClientAttributes, TrainerAttributes};

/// Score a dimension contributes when neither side has comparable data.
/// Sparse profiles land mid-range instead of being pushed to the bottom.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// The six comparison dimensions, in fixed declaration order. The order
/// doubles as the tie-break when two reasons contribute equally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Goals,
    Location,
    Budget,
    Schedule,
    Personality,
    Package,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Goals,
        Dimension::Location,
        Dimension::Budget,
        Dimension::Schedule,
        Dimension::Personality,
        Dimension::Package,
    ];

    pub fn weight(self, weights: &ScoringWeights) -> f64 {
        match self {
            Dimension::Goals => weights.goals,
            Dimension::Location => weights.location,
            Dimension::Budget => weights.budget,
            Dimension::Schedule => weights.schedule,
            Dimension::Personality => weights.personality,
            Dimension::Package => weights.package,
        }
    }
}

/// Sub-score for one dimension: bounded score plus an optional
/// human-readable reason surfaced in match results.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScore {
    pub score: f64,
    pub reason: Option<String>,
}

impl DimensionScore {
    fn new(score: f64, reason: Option<String>) -> Self {
        Self {
            score: score.clamp(0.0, 100.0),
            reason,
        }
    }

    fn neutral() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            reason: None,
        }
    }
}

/// Tunable scoring constants, externalized so product can adjust them
/// without touching scorer logic.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPolicy {
    /// Bonus applied to a pure online/in-person mismatch when the client is
    /// open to virtual coaching and the trainer delivers online.
    pub virtual_coaching_bonus: f64,
    /// Width of the budget tolerance band as a fraction of budget_max.
    pub budget_tolerance_ratio: f64,
    /// Score for hybrid-but-not-exact location compatibility.
    pub hybrid_location_score: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            virtual_coaching_bonus: 40.0,
            budget_tolerance_ratio: 0.25,
            hybrid_location_score: 70.0,
        }
    }
}

/// Goal match: fraction of the client's goals covered by trainer specialties.
pub fn score_goals(client: &ClientAttributes, trainer: &TrainerAttributes) -> DimensionScore {
    if client.goals.is_empty() || trainer.specialties.is_empty() {
        return DimensionScore::neutral();
    }

    let matched: Vec<&str> = client
        .goals
        .iter()
        .filter(|goal| trainer.specialties.contains(goal))
        .map(String::as_str)
        .collect();

    let score = matched.len() as f64 / client.goals.len() as f64 * 100.0;
    let reason = if matched.is_empty() {
        None
    } else {
        Some(format!("Specializes in your goals: {}", matched.join(", ")))
    };

    DimensionScore::new(score, reason)
}

/// Location compatibility: exact mode match beats hybrid beats mismatch, with
/// a virtual-coaching opt-in rescuing an otherwise dead mismatch.
pub fn score_location(
    client: &ClientAttributes,
    trainer: &TrainerAttributes,
    policy: &ScoringPolicy,
) -> DimensionScore {
    let client_pref = match client.location {
        Some(pref) => pref,
        None => return DimensionScore::neutral(),
    };
    if trainer.training_types.is_empty() {
        return DimensionScore::neutral();
    }

    if trainer.training_types.contains(&client_pref) {
        let label = match client_pref {
            LocationPreference::Online => "online",
            LocationPreference::InPerson => "in-person",
            LocationPreference::Hybrid => "hybrid",
        };
        return DimensionScore::new(100.0, Some(format!("Offers {label} training as you prefer")));
    }

    let hybrid_either_side = client_pref == LocationPreference::Hybrid
        || trainer.training_types.contains(&LocationPreference::Hybrid);
    if hybrid_either_side {
        return DimensionScore::new(
            policy.hybrid_location_score,
            Some("Hybrid training available".to_string()),
        );
    }

    // Pure online/in-person mismatch.
    if client.open_to_virtual && trainer.training_types.contains(&LocationPreference::Online) {
        return DimensionScore::new(
            policy.virtual_coaching_bonus,
            Some("Virtual coaching available since you're open to it".to_string()),
        );
    }

    DimensionScore::new(0.0, None)
}

/// Budget fit: full score inside the range, linear decay across a tolerance
/// band outside it, zero beyond the band. Flexibility widens the band.
pub fn score_budget(
    client: &ClientAttributes,
    trainer: &TrainerAttributes,
    policy: &ScoringPolicy,
) -> DimensionScore {
    let (band, rate) = match (client.budget, trainer.hourly_rate) {
        (Some(band), Some(rate)) => (band, rate),
        _ => return DimensionScore::neutral(),
    };

    if rate >= band.min && rate <= band.max {
        return DimensionScore::new(
            100.0,
            Some(format!("Rate ${rate:.0}/hr fits your budget")),
        );
    }

    let tolerance = band.max * policy.budget_tolerance_ratio * band.tolerance_multiplier;
    if tolerance <= 0.0 {
        return DimensionScore::new(0.0, None);
    }

    let distance = if rate > band.max {
        rate - band.max
    } else {
        band.min - rate
    };
    if distance >= tolerance {
        return DimensionScore::new(0.0, None);
    }

    let score = 100.0 * (1.0 - distance / tolerance);
    let reason = if rate > band.max {
        Some(format!("Rate ${rate:.0}/hr is slightly above your budget"))
    } else {
        None
    };
    DimensionScore::new(score, reason)
}

/// Schedule overlap: fraction of the client's preferred slots the trainer
/// has available.
pub fn score_schedule(client: &ClientAttributes, trainer: &TrainerAttributes) -> DimensionScore {
    if client.time_slots.is_empty() || trainer.availability_slots.is_empty() {
        return DimensionScore::neutral();
    }

    let overlap = client
        .time_slots
        .iter()
        .filter(|slot| trainer.availability_slots.contains(slot))
        .count();

    let score = overlap as f64 / client.time_slots.len() as f64 * 100.0;
    let reason = if overlap > 0 {
        Some(format!(
            "Available during {overlap} of your preferred time slots"
        ))
    } else {
        None
    };
    DimensionScore::new(score, reason)
}

/// Personality/style overlap between client tags and trainer-declared styles.
pub fn score_personality(client: &ClientAttributes, trainer: &TrainerAttributes) -> DimensionScore {
    if client.style_tags.is_empty() || trainer.style_tags.is_empty() {
        return DimensionScore::neutral();
    }

    let matched: Vec<&str> = client
        .style_tags
        .iter()
        .filter(|tag| trainer.style_tags.contains(tag))
        .map(String::as_str)
        .collect();

    let score = matched.len() as f64 / client.style_tags.len() as f64 * 100.0;
    let reason = if matched.is_empty() {
        None
    } else {
        Some(format!("Coaching style matches: {}", matched.join(", ")))
    };
    DimensionScore::new(score, reason)
}

/// Package fit: all-or-nothing on the client's preferred package shape.
pub fn score_package(client: &ClientAttributes, trainer: &TrainerAttributes) -> DimensionScore {
    let preferred = match client.package {
        Some(package) => package,
        None => return DimensionScore::neutral(),
    };
    if trainer.packages.is_empty() {
        return DimensionScore::neutral();
    }

    if trainer.packages.contains(&preferred) {
        DimensionScore::new(100.0, Some("Offers your preferred package type".to_string()))
    } else {
        DimensionScore::new(0.0, None)
    }
}

/// Score one dimension of a normalized client/trainer pair.
pub fn score_dimension(
    dimension: Dimension,
    client: &ClientAttributes,
    trainer: &TrainerAttributes,
    policy: &ScoringPolicy,
) -> DimensionScore {
    match dimension {
        Dimension::Goals => score_goals(client, trainer),
        Dimension::Location => score_location(client, trainer, policy),
        Dimension::Budget => score_budget(client, trainer, policy),
        Dimension::Schedule => score_schedule(client, trainer),
        Dimension::Personality => score_personality(client, trainer),
        Dimension::Package => score_package(client, trainer),
    }
}
