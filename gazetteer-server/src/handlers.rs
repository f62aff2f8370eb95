use crate::error::{ServerError, ServerResult};
use crate::models::{
    HealthResponse, MultiMatchItem, SearchMultipleRequest, SearchMultipleResponse, SearchRequest,
    SearchResponse,
};
use crate::state::AppState;

use axum::{extract::State, response::Html, Json};
use gazetteer_core::{LookupService, SearchResult};
use std::sync::Arc;
use tracing::{debug, info};

const DEFAULT_K: usize = 3;
const MAX_K: usize = 10;

/// Handler for `GET /`
/// Serves the static search form page.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Handler for `GET /health`
///
/// Liveness probe, not a readiness gate: always 200, with readiness
/// reported in the body.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.is_ready(),
        index_loaded: state.is_ready(),
        total_cities: state.total_cities(),
    })
}

/// Handler for `POST /search`
/// Resolves a city name to its single best state match.
pub async fn search_city(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> ServerResult<Json<SearchResponse>> {
    let service = state.service().cloned().ok_or(ServerError::NotReady)?;
    let city = validated_city(payload.city)?;
    debug!(query = %city, "Received search request");

    let results = run_lookup(service, city.clone(), 1).await?;
    let best = &results[0];
    info!(query = %city, matched_city = %best.city, state = %best.state, "Search resolved");

    Ok(Json(SearchResponse {
        success: true,
        query: city,
        matched_city: best.city.clone(),
        state: best.state.clone(),
        confidence: best.confidence(),
    }))
}

/// Handler for `POST /search_multiple`
/// Returns the top-k state matches for a city name, nearest first.
pub async fn search_multiple(
    State(state): State<AppState>,
    Json(payload): Json<SearchMultipleRequest>,
) -> ServerResult<Json<SearchMultipleResponse>> {
    let service = state.service().cloned().ok_or(ServerError::NotReady)?;
    let city = validated_city(payload.city)?;
    let k = payload.k.unwrap_or(DEFAULT_K).clamp(1, MAX_K);
    debug!(query = %city, k, "Received multi-search request");

    let results = run_lookup(service, city.clone(), k).await?;
    info!(query = %city, count = results.len(), "Multi-search resolved");

    let results = results
        .into_iter()
        .map(|r| MultiMatchItem {
            confidence: r.confidence(),
            city: r.city,
            state: r.state,
        })
        .collect();

    Ok(Json(SearchMultipleResponse {
        success: true,
        query: city,
        results,
    }))
}

fn validated_city(raw: Option<String>) -> ServerResult<String> {
    let city = raw.map(|c| c.trim().to_string()).unwrap_or_default();
    if city.is_empty() {
        return Err(ServerError::BadRequest("City name is required".to_string()));
    }
    Ok(city)
}

async fn run_lookup(
    service: Arc<LookupService>,
    query: String,
    k: usize,
) -> ServerResult<Vec<SearchResult>> {
    // Embedding and the index scan are CPU-bound; keep them off the async
    // worker threads.
    let results = tokio::task::spawn_blocking(move || service.lookup(&query, k))
        .await
        .map_err(|e| ServerError::Internal(format!("lookup task failed: {}", e)))??;

    if results.is_empty() {
        return Err(ServerError::NoMatch);
    }
    Ok(results)
}
