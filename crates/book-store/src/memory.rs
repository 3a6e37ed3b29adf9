use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{BookId, BookRecord, BookStoreError, Result, store::BookStore};

/// In-memory book store implementation.
///
/// Books are kept in id order, so `find_all` and `find_all_ids_sorted`
/// both return ascending ids. Provides the same interface and the same
/// uniqueness guarantee as the PostgreSQL implementation.
#[derive(Clone, Default)]
pub struct InMemoryBookStore {
    books: Arc<RwLock<BTreeMap<BookId, BookRecord>>>,
}

impl InMemoryBookStore {
    /// Creates a new empty in-memory book store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn insert(&self, book: BookRecord) -> Result<BookRecord> {
        let mut books = self.books.write().await;

        // Unique constraint simulation
        if books.contains_key(&book.id) {
            return Err(BookStoreError::DuplicateId(book.id));
        }

        books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn find_all(&self) -> Result<Vec<BookRecord>> {
        let books = self.books.read().await;
        Ok(books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<BookRecord>> {
        let books = self.books.read().await;
        Ok(books.get(&id).cloned())
    }

    async fn find_all_ids_sorted(&self) -> Result<Vec<BookId>> {
        let books = self.books.read().await;
        Ok(books.keys().copied().collect())
    }
}
