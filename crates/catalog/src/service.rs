//! Catalog service owning the bounded book collection.

use book_store::{BookId, BookRecord, BookStore};
use tokio::sync::Mutex;

use crate::allocator::next_slot;
use crate::book::NewBook;
use crate::error::CatalogError;

/// Service for adding and reading books.
///
/// Inserts run as read ids → allocate → write. Two concurrent inserts
/// could otherwise read the same id set and pick the same gap, so the
/// whole sequence runs under `allocation`. The store's uniqueness check
/// still rejects collisions from writers outside this process.
pub struct CatalogService<S: BookStore> {
    store: S,
    allocation: Mutex<()>,
}

impl<S: BookStore> CatalogService<S> {
    /// Creates a new catalog service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            allocation: Mutex::new(()),
        }
    }

    /// Returns a reference to the underlying book store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates raw input and adds the book.
    ///
    /// Invalid input is rejected before the allocation lock is taken, so
    /// it never depends on, or touches, the stored id set.
    pub async fn add(
        &self,
        title: Option<String>,
        rating: Option<i64>,
    ) -> Result<BookRecord, CatalogError> {
        let book = NewBook::from_input(title, rating)?;
        self.add_book(book).await
    }

    /// Adds a validated book under the lowest free id.
    #[tracing::instrument(skip(self, book), fields(title = %book.title))]
    pub async fn add_book(&self, book: NewBook) -> Result<BookRecord, CatalogError> {
        let _guard = self.allocation.lock().await;

        let used = self.store.find_all_ids_sorted().await?;
        let id = next_slot(&used).inspect_err(|_| {
            metrics::counter!("book_capacity_rejections_total").increment(1);
            tracing::warn!(in_use = used.len(), "catalog is full");
        })?;

        let stored = self.store.insert(book.into_record(id)).await?;

        metrics::counter!("books_created_total").increment(1);
        tracing::info!(book_id = %stored.id, rating = stored.rating, "book added");
        Ok(stored)
    }

    /// Returns every book in storage order.
    #[tracing::instrument(skip(self))]
    pub async fn list_books(&self) -> Result<Vec<BookRecord>, CatalogError> {
        Ok(self.store.find_all().await?)
    }

    /// Looks up a book by id. A miss is `Ok(None)`, not an error.
    #[tracing::instrument(skip(self))]
    pub async fn get_book(&self, id: BookId) -> Result<Option<BookRecord>, CatalogError> {
        Ok(self.store.find_by_id(id).await?)
    }
}
