use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::normalize::{normalize_client, normalize_trainer};
use crate::core::scoring::score_pair;
use crate::core::Matcher;
use crate::models::{
    DimensionEntry, ErrorResponse, ExplainMatchRequest, ExplainMatchResponse, FindMatchesRequest,
    FindMatchesResponse, HealthResponse, ScoringWeights, TierThresholds,
};
use crate::core::dimensions::ScoringPolicy;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub weights: ScoringWeights,
    pub thresholds: TierThresholds,
    pub policy: ScoringPolicy,
    pub max_limit: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/explain", web::post().to(explain_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// The request carries the client survey record, the trainer pool, and the
/// client's engagement stages. The response is the three ranked match views.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let limit = req.limit.min(state.max_limit) as usize;
    let request_id = uuid::Uuid::new_v4();

    tracing::info!(
        "[{}] Finding matches for client {} over {} trainers, limit {}",
        request_id,
        req.client.client_id,
        req.trainers.len(),
        limit
    );

    let outcome = state
        .matcher
        .find_matches(&req.client, req.trainers, &req.engagements, limit);

    tracing::info!(
        "[{}] Returning {} matches ({} top, {} good) from {} candidates",
        request_id,
        outcome.matched_trainers.len(),
        outcome.top_matches.len(),
        outcome.good_matches.len(),
        outcome.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matched_trainers: outcome.matched_trainers,
        top_matches: outcome.top_matches,
        good_matches: outcome.good_matches,
        total_candidates: outcome.total_candidates,
    })
}

/// Explain endpoint: per-dimension breakdown for one client/trainer pair.
///
/// POST /api/v1/matches/explain
async fn explain_match(
    state: web::Data<AppState>,
    req: web::Json<ExplainMatchRequest>,
) -> impl Responder {
    let req = req.into_inner();
    let client = normalize_client(&req.client);
    let trainer = normalize_trainer(&req.trainer);

    let breakdown = score_pair(
        &client,
        &trainer,
        &state.weights,
        &state.thresholds,
        &state.policy,
    );

    let dimensions = breakdown
        .dimensions
        .iter()
        .map(|entry| DimensionEntry {
            dimension: entry.dimension,
            weight: entry.weight,
            score: entry.score,
            reason: entry.reason.clone(),
        })
        .collect();

    HttpResponse::Ok().json(ExplainMatchResponse {
        trainer_id: req.trainer.id,
        score: breakdown.total,
        tier: breakdown.tier,
        dimensions,
        match_reasons: breakdown.reasons(),
    })
}
