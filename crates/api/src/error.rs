//! API error types with HTTP response mapping.
//!
//! Every failure renders as `{"httpCode": <status>, "message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::CatalogError;
use recommendations::RecommendationError;
use serde::Serialize;

/// Message returned for every failure whose cause must stay private.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Catalog operation error.
    Catalog(CatalogError),
    /// Recommendation error.
    Recommendation(RecommendationError),
}

/// Error body shared by both services.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub http_code: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Catalog(err) => catalog_error_to_response(err),
            ApiError::Recommendation(err) => recommendation_error_to_response(err),
        };

        metrics::counter!("http_error_responses_total", "status" => status.as_u16().to_string())
            .increment(1);

        let body = ErrorEnvelope {
            http_code: status.as_u16(),
            message,
        };
        (status, axum::Json(body)).into_response()
    }
}

fn catalog_error_to_response(err: CatalogError) -> (StatusCode, String) {
    match &err {
        CatalogError::Validation(_) | CatalogError::CapacityExceeded { .. } => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        CatalogError::AllocationConflict(_) => (StatusCode::CONFLICT, err.to_string()),
        CatalogError::Store(cause) => {
            tracing::error!(error = %cause, "book store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            )
        }
    }
}

fn recommendation_error_to_response(err: RecommendationError) -> (StatusCode, String) {
    match &err {
        RecommendationError::UpstreamUnavailable(cause) => {
            tracing::error!(error = %cause, "book service unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Catalog(err)
    }
}

impl From<RecommendationError> for ApiError {
    fn from(err: RecommendationError) -> Self {
        ApiError::Recommendation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use book_store::{BookId, BookStoreError};
    use catalog::BookValidationError;
    use recommendations::UpstreamError;

    #[test]
    fn validation_maps_to_bad_request_with_reason() {
        let (status, message) =
            catalog_error_to_response(CatalogError::Validation(BookValidationError::TitleBlank));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Title cannot be blank");
    }

    #[test]
    fn capacity_maps_to_bad_request() {
        let (status, message) =
            catalog_error_to_response(CatalogError::CapacityExceeded { capacity: 21 });
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Maximum capacity reached");
    }

    #[test]
    fn allocation_conflict_maps_to_conflict() {
        let err = CatalogError::from(BookStoreError::DuplicateId(BookId::new(4)));
        let (status, message) = catalog_error_to_response(err);
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(message.contains('4'), "message should name the id: {message}");
    }

    #[tokio::test]
    async fn allocation_conflict_renders_envelope() {
        let response =
            ApiError::from(CatalogError::AllocationConflict(BookId::new(4))).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["httpCode"], 409);
        assert!(json["message"].is_string());
    }

    #[test]
    fn store_failure_hides_its_cause() {
        let cause = BookStoreError::CorruptRow {
            column: "rating",
            value: 99,
        };
        let (status, message) = catalog_error_to_response(CatalogError::Store(cause));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn upstream_failure_maps_to_service_unavailable() {
        let err = RecommendationError::UpstreamUnavailable(UpstreamError::Unavailable(
            "refused".to_string(),
        ));
        let (status, message) = recommendation_error_to_response(err);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!message.contains("refused"));
    }

    #[test]
    fn envelope_uses_camel_case() {
        let json = serde_json::to_value(ErrorEnvelope {
            http_code: 404,
            message: "gone".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"httpCode": 404, "message": "gone"}));
    }
}
