use std::collections::HashMap;

use crate::core::dimensions::ScoringPolicy;
use crate::core::engagement::EngagementStage;
use crate::core::normalize::{normalize_client, normalize_trainer};
use crate::core::scoring::score_pair;
use crate::models::{
    ClientPreferences, MatchResult, MatchTier, ScoringWeights, TierThresholds, TrainerProfile,
};

/// Result of one matching invocation: the three ranked views consumed by
/// the UI, plus the size of the pool that was considered.
#[derive(Debug)]
pub struct MatchOutcome {
    pub matched_trainers: Vec<MatchResult>,
    pub top_matches: Vec<MatchResult>,
    pub good_matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Main matching orchestrator.
///
/// # Pipeline
/// 1. Filter the pool to published, browsing-eligible trainers
/// 2. Normalize both sides of every remaining pair
/// 3. Score each pair across the six dimensions and aggregate
/// 4. Rank deterministically and partition into match views
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    thresholds: TierThresholds,
    policy: ScoringPolicy,
    top_matches_cap: usize,
}

impl Matcher {
    pub fn new(
        weights: ScoringWeights,
        thresholds: TierThresholds,
        policy: ScoringPolicy,
        top_matches_cap: usize,
    ) -> Self {
        Self {
            weights,
            thresholds,
            policy,
            top_matches_cap,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            ScoringWeights::default(),
            TierThresholds::default(),
            ScoringPolicy::default(),
            5,
        )
    }

    /// Find matches for one client against a trainer pool.
    ///
    /// `engagements` maps trainer id to the client's current stage with that
    /// trainer; any stage beyond browsing removes the trainer from the pool.
    /// Pure and synchronous: identical inputs always yield identical output.
    pub fn find_matches(
        &self,
        preferences: &ClientPreferences,
        trainers: Vec<TrainerProfile>,
        engagements: &HashMap<String, EngagementStage>,
        limit: usize,
    ) -> MatchOutcome {
        let total_candidates = trainers.len();
        let client = normalize_client(preferences);

        let mut scored: Vec<MatchResult> = trainers
            .into_iter()
            .filter(|trainer| trainer.is_published)
            .filter(|trainer| {
                engagements
                    .get(&trainer.id)
                    .map_or(true, |stage| stage.browsing_eligible())
            })
            .filter_map(|trainer| {
                let attrs = normalize_trainer(&trainer);
                let breakdown =
                    score_pair(&client, &attrs, &self.weights, &self.thresholds, &self.policy);

                // Unranked scores are excluded from every view.
                if breakdown.tier == MatchTier::Unranked {
                    return None;
                }

                Some(MatchResult {
                    trainer_id: trainer.id,
                    name: trainer.name,
                    specialties: trainer.specialties,
                    hourly_rate: trainer.hourly_rate,
                    location: trainer.location,
                    rating: trainer.rating,
                    score: breakdown.total,
                    tier: breakdown.tier,
                    match_reasons: breakdown.reasons(),
                })
            })
            .collect();

        // Total order: score desc, rating desc, trainer id asc. The id leg
        // makes ranking deterministic regardless of input order.
        scored.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| {
                    b.rating
                        .unwrap_or(0.0)
                        .partial_cmp(&a.rating.unwrap_or(0.0))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.trainer_id.cmp(&b.trainer_id))
        });

        let top_matches: Vec<MatchResult> = scored
            .iter()
            .filter(|m| m.score >= self.thresholds.great)
            .take(self.top_matches_cap)
            .cloned()
            .collect();

        let good_matches: Vec<MatchResult> = scored
            .iter()
            .filter(|m| m.score >= self.thresholds.good && m.score < self.thresholds.great)
            .cloned()
            .collect();

        scored.truncate(limit);

        MatchOutcome {
            matched_trainers: scored,
            top_matches,
            good_matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationPreference;

    fn create_client() -> ClientPreferences {
        ClientPreferences {
            client_id: "c1".to_string(),
            primary_goals: vec!["weight_loss".to_string()],
            training_location_preference: Some(LocationPreference::Online),
            budget_range_min: Some(50.0),
            budget_range_max: Some(100.0),
            ..Default::default()
        }
    }

    fn create_trainer(id: &str, specialties: &[&str], rate: f64, rating: f64) -> TrainerProfile {
        TrainerProfile {
            id: id.to_string(),
            name: format!("Trainer {id}"),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            location: None,
            hourly_rate: Some(rate),
            training_types: vec![LocationPreference::Online],
            availability_slots: vec![],
            coaching_styles: vec![],
            package_types: vec![],
            certifications: vec![],
            rating: Some(rating),
            review_count: Some(10),
            is_published: true,
            created_at: None,
        }
    }

    #[test]
    fn test_find_matches_basic() {
        let matcher = Matcher::with_defaults();
        let trainers = vec![
            create_trainer("1", &["weight_loss"], 75.0, 4.5),
            create_trainer("2", &["powerlifting"], 75.0, 4.5),
        ];

        let outcome =
            matcher.find_matches(&create_client(), trainers, &HashMap::new(), 10);

        assert_eq!(outcome.total_candidates, 2);
        assert_eq!(outcome.matched_trainers[0].trainer_id, "1");
        assert!(outcome.matched_trainers[0].score > outcome.matched_trainers[1].score);
    }

    #[test]
    fn test_empty_pool_produces_empty_views() {
        let matcher = Matcher::with_defaults();
        let outcome = matcher.find_matches(&create_client(), vec![], &HashMap::new(), 10);

        assert!(outcome.matched_trainers.is_empty());
        assert!(outcome.top_matches.is_empty());
        assert!(outcome.good_matches.is_empty());
        assert_eq!(outcome.total_candidates, 0);
    }

    #[test]
    fn test_engaged_trainers_excluded() {
        let matcher = Matcher::with_defaults();
        let trainers = vec![
            create_trainer("1", &["weight_loss"], 75.0, 4.5),
            create_trainer("2", &["weight_loss"], 75.0, 4.5),
        ];
        let engagements = HashMap::from([
            ("1".to_string(), EngagementStage::Shortlisted),
            ("2".to_string(), EngagementStage::Browsing),
        ]);

        let outcome = matcher.find_matches(&create_client(), trainers, &engagements, 10);

        assert_eq!(outcome.matched_trainers.len(), 1);
        assert_eq!(outcome.matched_trainers[0].trainer_id, "2");
    }

    #[test]
    fn test_unpublished_trainers_excluded() {
        let matcher = Matcher::with_defaults();
        let mut hidden = create_trainer("1", &["weight_loss"], 75.0, 4.5);
        hidden.is_published = false;

        let outcome =
            matcher.find_matches(&create_client(), vec![hidden], &HashMap::new(), 10);
        assert!(outcome.matched_trainers.is_empty());
    }

    #[test]
    fn test_tie_break_rating_then_id() {
        let matcher = Matcher::with_defaults();
        // Identical profiles except rating and id.
        let trainers = vec![
            create_trainer("b", &["weight_loss"], 75.0, 4.0),
            create_trainer("c", &["weight_loss"], 75.0, 5.0),
            create_trainer("a", &["weight_loss"], 75.0, 4.0),
        ];

        let outcome = matcher.find_matches(&create_client(), trainers, &HashMap::new(), 10);

        let ids: Vec<&str> = outcome
            .matched_trainers
            .iter()
            .map(|m| m.trainer_id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_tie_break_stable_across_input_orderings() {
        let matcher = Matcher::with_defaults();
        let client = create_client();

        let forward = vec![
            create_trainer("a", &["weight_loss"], 75.0, 4.0),
            create_trainer("b", &["weight_loss"], 75.0, 4.0),
        ];
        let reversed = vec![
            create_trainer("b", &["weight_loss"], 75.0, 4.0),
            create_trainer("a", &["weight_loss"], 75.0, 4.0),
        ];

        let first = matcher.find_matches(&client, forward, &HashMap::new(), 10);
        let second = matcher.find_matches(&client, reversed, &HashMap::new(), 10);

        let ids = |o: &MatchOutcome| {
            o.matched_trainers
                .iter()
                .map(|m| m.trainer_id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_respects_limit_and_top_cap() {
        let matcher = Matcher::new(
            ScoringWeights::default(),
            TierThresholds::default(),
            ScoringPolicy::default(),
            3,
        );
        let trainers: Vec<TrainerProfile> = (0..20)
            .map(|i| create_trainer(&format!("t{i:02}"), &["weight_loss"], 75.0, 4.0))
            .collect();

        let outcome = matcher.find_matches(&create_client(), trainers, &HashMap::new(), 5);

        assert_eq!(outcome.matched_trainers.len(), 5);
        assert_eq!(outcome.top_matches.len(), 3);
    }

    #[test]
    fn test_bucket_partition() {
        let matcher = Matcher::with_defaults();
        // Strong match lands >= 60; mismatched trainer falls into a lower band.
        let trainers = vec![
            create_trainer("strong", &["weight_loss"], 75.0, 4.5),
            create_trainer("weak", &["powerlifting"], 140.0, 3.0),
        ];

        let outcome = matcher.find_matches(&create_client(), trainers, &HashMap::new(), 10);

        for m in &outcome.top_matches {
            assert!(m.score >= 60);
        }
        for m in &outcome.good_matches {
            assert!(m.score >= 40 && m.score < 60);
        }
    }

    #[test]
    fn test_all_scores_in_range() {
        let matcher = Matcher::with_defaults();
        let trainers: Vec<TrainerProfile> = (0..30)
            .map(|i| {
                create_trainer(
                    &format!("t{i}"),
                    if i % 2 == 0 { &["weight_loss"] } else { &["yoga"] },
                    40.0 + i as f64 * 5.0,
                    3.0 + (i % 3) as f64,
                )
            })
            .collect();

        let outcome = matcher.find_matches(&create_client(), trainers, &HashMap::new(), 30);
        for m in &outcome.matched_trainers {
            assert!(m.score <= 100);
        }
    }
}
