//! HTTP servers for the book catalog system.
//!
//! Provides the book service (add, list and look up books) and the
//! recommendation service (books ordered by rating, fetched from the book
//! service), each with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use book_store::BookStore;
use catalog::CatalogService;
use metrics_exporter_prometheus::PrometheusHandle;
use recommendations::{RecommendationService, UpstreamClient};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::books::BookAppState;
use routes::recommended::RecommendationAppState;

fn with_common_layers(router: Router, metrics_handle: PrometheusHandle) -> Router {
    router
        .merge(routes::metrics::router(metrics_handle))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the book service router.
pub fn create_book_app<S: BookStore + 'static>(
    state: Arc<BookAppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let router = Router::new()
        .route("/health", get(routes::health::books::<S>))
        .route(
            "/api/books",
            get(routes::books::list::<S>).post(routes::books::create::<S>),
        )
        .route("/api/books/{id}", get(routes::books::get::<S>))
        .with_state(state);

    with_common_layers(router, metrics_handle)
}

/// Creates the recommendation service router.
pub fn create_recommendation_app<C: UpstreamClient + 'static>(
    state: Arc<RecommendationAppState<C>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let router = Router::new()
        .route("/health", get(routes::health::recommendations::<C>))
        .route("/api/recommended", get(routes::recommended::list::<C>))
        .with_state(state);

    with_common_layers(router, metrics_handle)
}

/// Creates the book service state over the given store.
pub fn create_book_state<S: BookStore>(store: S) -> Arc<BookAppState<S>> {
    Arc::new(BookAppState {
        catalog: CatalogService::new(store),
    })
}

/// Creates the recommendation service state over the given client.
///
/// `fetch_deadline` bounds every upstream fetch; pass
/// [`config::Config::fetch_deadline`] so it matches the client's budgets.
pub fn create_recommendation_state<C: UpstreamClient>(
    client: C,
    fetch_deadline: Duration,
) -> Arc<RecommendationAppState<C>> {
    Arc::new(RecommendationAppState {
        recommendations: RecommendationService::new(client).with_fetch_deadline(fetch_deadline),
    })
}
