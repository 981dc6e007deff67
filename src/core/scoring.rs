use crate::core::dimensions::{score_dimension, Dimension, ScoringPolicy};
use crate::core::normalize::{ClientAttributes, TrainerAttributes};
use crate::models::{MatchTier, ScoringWeights, TierThresholds};

/// One dimension's contribution to an aggregate score.
#[derive(Debug, Clone)]
pub struct DimensionBreakdown {
    pub dimension: Dimension,
    pub weight: f64,
    pub score: f64,
    pub reason: Option<String>,
}

impl DimensionBreakdown {
    /// Weighted contribution, used to order match reasons.
    pub fn contribution(&self) -> f64 {
        self.weight * self.score
    }
}

/// Full scoring output for one client/trainer pair.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub total: u8,
    pub tier: MatchTier,
    pub dimensions: Vec<DimensionBreakdown>,
}

impl ScoreBreakdown {
    /// Non-empty reasons, highest-contributing dimension first. Equal
    /// contributions keep the fixed dimension declaration order.
    pub fn reasons(&self) -> Vec<String> {
        let mut with_reasons: Vec<&DimensionBreakdown> = self
            .dimensions
            .iter()
            .filter(|entry| entry.reason.is_some())
            .collect();
        // Stable sort preserves declaration order for equal contributions.
        with_reasons.sort_by(|a, b| {
            b.contribution()
                .partial_cmp(&a.contribution())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        with_reasons
            .into_iter()
            .filter_map(|entry| entry.reason.clone())
            .collect()
    }
}

/// Score a normalized client/trainer pair across all six dimensions and
/// combine with the configured weights: `round(sum(w_i * s_i))` clamped to
/// [0, 100]. Deterministic for identical inputs.
pub fn score_pair(
    client: &ClientAttributes,
    trainer: &TrainerAttributes,
    weights: &ScoringWeights,
    thresholds: &TierThresholds,
    policy: &ScoringPolicy,
) -> ScoreBreakdown {
    let dimensions: Vec<DimensionBreakdown> = Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let result = score_dimension(dimension, client, trainer, policy);
            DimensionBreakdown {
                dimension,
                weight: dimension.weight(weights),
                score: result.score,
                reason: result.reason,
            }
        })
        .collect();

    let weighted: f64 = dimensions.iter().map(DimensionBreakdown::contribution).sum();
    let total = weighted.round().clamp(0.0, 100.0) as u8;

    ScoreBreakdown {
        total,
        tier: thresholds.tier_for(total),
        dimensions,
    }
}
