//! Recommendation API handler
//!
//! POST /recommend: dish names in, one recommendation per dish out.
//! The response is a flat JSON array in input order; fallback results
//! are indistinguishable from live ones at this boundary.

use axum::{extract::State, routing::post, Json, Router};
use somm_common::api::{RecommendRequest, RecommendationResult};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /recommend
///
/// 400 when the dish list is empty; per-dish vendor failures never
/// surface here (they are absorbed by the orchestrator's fallback).
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> ApiResult<Json<Vec<RecommendationResult>>> {
    if request.dishes.is_empty() {
        return Err(ApiError::BadRequest(
            "At least one dish is required".to_string(),
        ));
    }

    tracing::info!(dishes = request.dishes.len(), "Recommendation request");

    let results = state.orchestrator.recommend(&request.dishes).await?;

    Ok(Json(results))
}

/// Build recommendation routes
pub fn recommend_routes() -> Router<AppState> {
    Router::new().route("/recommend", post(recommend))
}
