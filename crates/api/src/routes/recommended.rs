//! Recommendation service endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use recommendations::{BookView, RecommendationService, UpstreamClient};

use crate::error::ApiError;

/// Shared state of the recommendation service.
pub struct RecommendationAppState<C: UpstreamClient> {
    pub recommendations: RecommendationService<C>,
}

/// GET /api/recommended: every book, highest rating first.
#[tracing::instrument(skip(state))]
pub async fn list<C: UpstreamClient + 'static>(
    State(state): State<Arc<RecommendationAppState<C>>>,
) -> Result<Json<Vec<BookView>>, ApiError> {
    let books = state.recommendations.recommend().await?;
    Ok(Json(books))
}
