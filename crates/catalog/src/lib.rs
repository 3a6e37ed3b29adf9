//! Book catalog for the book service.
//!
//! This crate provides:
//! - Gap-filling slot allocation over the bounded id range
//! - Validated `Title` and `Rating` value objects
//! - `CatalogService`, which serializes the read-allocate-write sequence
//!   of every insert

pub mod allocator;
pub mod book;
pub mod error;
pub mod service;

pub use allocator::next_slot;
pub use book::{BookValidationError, NewBook, Rating, Title};
pub use book_store::BookRecord as Book;
pub use error::CatalogError;
pub use service::CatalogService;
