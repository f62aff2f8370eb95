//! Defines the data structures used for API request and response bodies.

use serde::{Deserialize, Serialize};

// --- Request Bodies ---

/// Request body for `POST /search`.
///
/// `city` is an `Option` so a missing key surfaces as our own 400 with a
/// descriptive message instead of a body-deserialization rejection.
#[derive(Deserialize)]
pub struct SearchRequest {
    pub city: Option<String>,
}

/// Request body for `POST /search_multiple`.
#[derive(Deserialize)]
pub struct SearchMultipleRequest {
    pub city: Option<String>,
    pub k: Option<usize>,
}

// --- Response Bodies ---

/// Response body for a single best match.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub matched_city: String,
    pub state: String,
    pub confidence: f32,
}

/// One ranked candidate in a multi-match response.
#[derive(Debug, Serialize)]
pub struct MultiMatchItem {
    pub city: String,
    pub state: String,
    pub confidence: f32,
}

/// Response body for ranked multi-match results, nearest first.
#[derive(Debug, Serialize)]
pub struct SearchMultipleResponse {
    pub success: bool,
    pub query: String,
    pub results: Vec<MultiMatchItem>,
}

/// Response body for the health probe.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub index_loaded: bool,
    pub total_cities: usize,
}
