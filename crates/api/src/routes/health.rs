//! Health check endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use book_store::{BookStore, BookStoreExt};
use catalog::CatalogError;
use recommendations::UpstreamClient;
use serde::Serialize;

use super::books::BookAppState;
use super::recommended::RecommendationAppState;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    /// Books currently stored; only reported by the book service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<usize>,
}

/// GET /health on the book service: confirms the store answers.
pub async fn books<S: BookStore + 'static>(
    State(state): State<Arc<BookAppState<S>>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let count = state
        .catalog
        .store()
        .count()
        .await
        .map_err(CatalogError::from)?;

    Ok(Json(HealthResponse {
        status: "ok",
        service: "book-service",
        books: Some(count),
    }))
}

/// GET /health on the recommendation service. Does not call the book
/// service, so an upstream outage does not mark this process unhealthy.
pub async fn recommendations<C: UpstreamClient + 'static>(
    State(_state): State<Arc<RecommendationAppState<C>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "recommendation-service",
        books: None,
    })
}
