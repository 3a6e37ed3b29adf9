use async_trait::async_trait;

use crate::{BookId, BookRecord, Result};

/// Core trait for book store implementations.
///
/// A book store persists books keyed by id. It performs no allocation of
/// its own: ids arrive already chosen by the catalog. All implementations
/// must be thread-safe (Send + Sync).
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persists a new book.
    ///
    /// Fails with `DuplicateId` if a book with the same id is already
    /// stored. Returns the stored record.
    async fn insert(&self, book: BookRecord) -> Result<BookRecord>;

    /// Retrieves every stored book in storage order.
    async fn find_all(&self) -> Result<Vec<BookRecord>>;

    /// Retrieves a single book by id.
    ///
    /// Returns None if no book has that id.
    async fn find_by_id(&self, id: BookId) -> Result<Option<BookRecord>>;

    /// Retrieves only the ids currently in use, ascending.
    ///
    /// This is the narrow read the catalog's allocator runs on; it must not
    /// load titles or ratings.
    async fn find_all_ids_sorted(&self) -> Result<Vec<BookId>>;
}

/// Extension trait providing convenience methods for book stores.
#[async_trait]
pub trait BookStoreExt: BookStore {
    /// Returns the number of stored books.
    async fn count(&self) -> Result<usize> {
        Ok(self.find_all_ids_sorted().await?.len())
    }

    /// Checks whether a book with the given id is stored.
    async fn contains(&self, id: BookId) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

// Blanket implementation for all BookStore implementations
impl<T: BookStore + ?Sized> BookStoreExt for T {}
