//! Book service endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use book_store::{BookId, BookStore};
use catalog::{Book, CatalogService};
use serde::Deserialize;

use crate::error::ApiError;

/// Shared state of the book service.
pub struct BookAppState<S: BookStore> {
    pub catalog: CatalogService<S>,
}

// -- Request types --

/// Body of `POST /api/books`. Fields are optional here so that missing
/// values are reported with the catalog's own messages.
#[derive(Deserialize)]
pub struct AddBookRequest {
    pub title: Option<String>,
    pub rating: Option<i64>,
}

// -- Handlers --

/// POST /api/books: add a book under the lowest free id.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: BookStore + 'static>(
    State(state): State<Arc<BookAppState<S>>>,
    payload: Result<Json<AddBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let book = state.catalog.add(req.title, req.rating).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// GET /api/books: list every book.
#[tracing::instrument(skip(state))]
pub async fn list<S: BookStore + 'static>(
    State(state): State<Arc<BookAppState<S>>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.catalog.list_books().await?;
    Ok(Json(books))
}

/// GET /api/books/:id: look up one book.
#[tracing::instrument(skip(state, id))]
pub async fn get<S: BookStore + 'static>(
    State(state): State<Arc<BookAppState<S>>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(raw) = id.map_err(|_| ApiError::BadRequest("Invalid book id".to_string()))?;
    let not_found = || ApiError::NotFound(format!("Book {raw} not found"));

    // Ids outside the slot range can never be stored.
    let book_id = BookId::from_i64(raw).ok_or_else(not_found)?;
    let book = state
        .catalog
        .get_book(book_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(book))
}
