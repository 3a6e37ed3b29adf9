//! Catalog error types.

use book_store::{BookId, BookStoreError};
use thiserror::Error;

use crate::book::BookValidationError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The submitted book failed validation.
    #[error(transparent)]
    Validation(#[from] BookValidationError),

    /// Every slot is taken.
    #[error("Maximum capacity reached")]
    CapacityExceeded { capacity: usize },

    /// The store already held the allocated id. Only reachable when
    /// something outside this service writes to the same store.
    #[error("Book id {0} was taken concurrently, please retry")]
    AllocationConflict(BookId),

    /// An error occurred in the book store.
    #[error("Book store error: {0}")]
    Store(BookStoreError),
}

impl From<BookStoreError> for CatalogError {
    fn from(err: BookStoreError) -> Self {
        match err {
            BookStoreError::DuplicateId(id) => CatalogError::AllocationConflict(id),
            other => CatalogError::Store(other),
        }
    }
}
