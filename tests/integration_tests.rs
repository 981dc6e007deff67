// Integration tests for Coachmatch matching pipeline

use std::collections::HashMap;

use coachmatch::core::EngagementStage;
use coachmatch::models::{
    ClientPreferences, LocationPreference, MatchTier, PackageType, TrainerProfile,
};
use coachmatch::Matcher;

fn create_client() -> ClientPreferences {
    ClientPreferences {
        client_id: "client-1".to_string(),
        primary_goals: vec!["weight_loss".to_string()],
        secondary_goals: vec!["mobility".to_string()],
        training_location_preference: Some(LocationPreference::Online),
        preferred_time_slots: vec!["weekday_morning".to_string(), "weekend".to_string()],
        preferred_coaching_style: vec!["supportive".to_string()],
        preferred_package_type: Some(PackageType::Monthly),
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
        location: Some("Berlin".to_string()),
        hourly_rate: Some(rate),
        training_types: vec![LocationPreference::Online],
        availability_slots: vec!["weekday_morning".to_string()],
        coaching_styles: vec!["supportive".to_string()],
        package_types: vec![PackageType::Monthly, PackageType::SingleSession],
        certifications: vec![],
        rating: Some(rating),
        review_count: Some(25),
        is_published: true,
        created_at: None,
    }
}

#[test]
fn test_end_to_end_matching() {
    let matcher = Matcher::with_defaults();
    let client = create_client();

    let trainers = vec![
        create_trainer("aligned", &["weight_loss", "mobility"], 75.0, 4.8),
        create_trainer("partial", &["weight_loss"], 95.0, 4.2),
        create_trainer("off-goal", &["powerlifting"], 75.0, 4.5),
        create_trainer("pricey", &["weight_loss", "mobility"], 150.0, 4.9),
    ];

    let outcome = matcher.find_matches(&client, trainers, &HashMap::new(), 10);

    assert_eq!(outcome.total_candidates, 4);
    assert!(!outcome.matched_trainers.is_empty());

    // Fully aligned trainer ranks first.
    assert_eq!(outcome.matched_trainers[0].trainer_id, "aligned");
    assert_eq!(outcome.matched_trainers[0].tier, MatchTier::Perfect);
    assert!(outcome.matched_trainers[0]
        .match_reasons
        .iter()
        .any(|r| r.contains("weight_loss")));

    // Sorted by score descending throughout.
    for pair in outcome.matched_trainers.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_bucket_views_respect_thresholds() {
    let matcher = Matcher::with_defaults();
    let client = create_client();

    let trainers: Vec<TrainerProfile> = (0..15)
        .map(|i| {
            let specialties: Vec<&str> = match i % 3 {
                0 => vec!["weight_loss", "mobility"],
                1 => vec!["weight_loss"],
                _ => vec!["powerlifting"],
            };
            create_trainer(&format!("t{i:02}"), &specialties, 60.0 + i as f64 * 8.0, 4.0)
        })
        .collect();

    let outcome = matcher.find_matches(&client, trainers, &HashMap::new(), 15);

    for m in &outcome.top_matches {
        assert!(m.score >= 60, "top match below great threshold: {}", m.score);
    }
    assert!(outcome.top_matches.len() <= 5);

    for m in &outcome.good_matches {
        assert!(
            m.score >= 40 && m.score < 60,
            "good match outside band: {}",
            m.score
        );
    }

    // No unranked entries leak into any view.
    for m in outcome
        .matched_trainers
        .iter()
        .chain(&outcome.top_matches)
        .chain(&outcome.good_matches)
    {
        assert!(m.tier != MatchTier::Unranked);
        assert!(m.score >= 20);
    }
}

#[test]
fn test_empty_pool_is_not_an_error() {
    let matcher = Matcher::with_defaults();
    let outcome = matcher.find_matches(&create_client(), vec![], &HashMap::new(), 10);

    assert!(outcome.matched_trainers.is_empty());
    assert!(outcome.top_matches.is_empty());
    assert!(outcome.good_matches.is_empty());
}

#[test]
fn test_incomplete_survey_never_panics() {
    let matcher = Matcher::with_defaults();
    let sparse_client = ClientPreferences {
        client_id: "sparse".to_string(),
        ..Default::default()
    };

    let mut sparse_trainer = create_trainer("bare", &[], 0.0, 0.0);
    sparse_trainer.hourly_rate = None;
    sparse_trainer.training_types = vec![];
    sparse_trainer.availability_slots = vec![];
    sparse_trainer.coaching_styles = vec![];
    sparse_trainer.package_types = vec![];
    sparse_trainer.rating = None;

    let trainers = vec![sparse_trainer, create_trainer("full", &["weight_loss"], 75.0, 4.5)];
    let outcome = matcher.find_matches(&sparse_client, trainers, &HashMap::new(), 10);

    // Every dimension neutral for both pairs: both land mid-range, not zero.
    assert_eq!(outcome.matched_trainers.len(), 2);
    for m in &outcome.matched_trainers {
        assert!(m.score >= 20 && m.score <= 100);
    }
}

#[test]
fn test_engagement_pool_filtering() {
    let matcher = Matcher::with_defaults();
    let client = create_client();

    let trainers = vec![
        create_trainer("a", &["weight_loss"], 75.0, 4.5),
        create_trainer("b", &["weight_loss"], 75.0, 4.5),
        create_trainer("c", &["weight_loss"], 75.0, 4.5),
        create_trainer("d", &["weight_loss"], 75.0, 4.5),
    ];
    let engagements = HashMap::from([
        ("a".to_string(), EngagementStage::Browsing),
        ("b".to_string(), EngagementStage::DiscoveryCallBooked),
        ("c".to_string(), EngagementStage::Declined),
    ]);

    let outcome = matcher.find_matches(&client, trainers, &engagements, 10);

    let ids: Vec<&str> = outcome
        .matched_trainers
        .iter()
        .map(|m| m.trainer_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "d"]);
}

#[test]
fn test_deterministic_ranking_with_ties() {
    let matcher = Matcher::with_defaults();
    let client = create_client();

    let make_pool = || {
        vec![
            create_trainer("delta", &["weight_loss"], 75.0, 4.0),
            create_trainer("alpha", &["weight_loss"], 75.0, 4.0),
            create_trainer("charlie", &["weight_loss"], 75.0, 4.0),
            create_trainer("bravo", &["weight_loss"], 75.0, 5.0),
        ]
    };

    let expect = vec!["bravo", "alpha", "charlie", "delta"];
    for _ in 0..3 {
        let outcome = matcher.find_matches(&client, make_pool(), &HashMap::new(), 10);
        let ids: Vec<&str> = outcome
            .matched_trainers
            .iter()
            .map(|m| m.trainer_id.as_str())
            .collect();
        assert_eq!(ids, expect);
    }
}

#[test]
fn test_match_result_serializes_camel_case() {
    let matcher = Matcher::with_defaults();
    let trainers = vec![create_trainer("t1", &["weight_loss"], 75.0, 4.5)];
    let outcome = matcher.find_matches(&create_client(), trainers, &HashMap::new(), 10);

    let json = serde_json::to_value(&outcome.matched_trainers[0]).unwrap();
    assert_eq!(json["trainerId"], "t1");
    assert!(json["matchReasons"].is_array());
    assert!(json["score"].as_u64().unwrap() <= 100);
}
