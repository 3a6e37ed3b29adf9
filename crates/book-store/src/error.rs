use thiserror::Error;

use crate::BookId;

/// Errors that can occur when interacting with the book store.
#[derive(Debug, Error)]
pub enum BookStoreError {
    /// A book with this id is already stored.
    #[error("Book id {0} is already in use")]
    DuplicateId(BookId),

    /// A stored row holds a value outside its column's domain.
    #[error("Corrupt row: column {column} holds {value}")]
    CorruptRow { column: &'static str, value: i64 },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for book store operations.
pub type Result<T> = std::result::Result<T, BookStoreError>;
