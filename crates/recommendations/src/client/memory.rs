//! In-memory book service client.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::UpstreamClient;
use crate::error::UpstreamError;
use crate::view::BookView;

#[derive(Debug, Default)]
struct InMemoryClientState {
    books: Vec<BookView>,
    fail_with: Option<String>,
    delay: Option<Duration>,
    fetch_count: usize,
}

/// In-memory stand-in for the book service, for tests and local runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookClient {
    state: Arc<Mutex<InMemoryClientState>>,
}

impl InMemoryBookClient {
    /// Creates a client that serves an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client that serves the given books in order.
    pub fn with_books(books: Vec<BookView>) -> Self {
        let client = Self::new();
        client.set_books(books);
        client
    }

    pub fn set_books(&self, books: Vec<BookView>) {
        self.state().books = books;
    }

    /// Makes every following fetch fail with the given reason, or succeed
    /// again when `None`.
    pub fn set_failure(&self, reason: Option<&str>) {
        self.state().fail_with = reason.map(str::to_string);
    }

    /// Delays every following fetch.
    pub fn set_delay(&self, delay: Option<Duration>) {
        self.state().delay = delay;
    }

    /// Returns the number of fetches made so far.
    pub fn fetch_count(&self) -> usize {
        self.state().fetch_count
    }

    fn state(&self) -> MutexGuard<'_, InMemoryClientState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UpstreamClient for InMemoryBookClient {
    async fn fetch_all(&self) -> Result<Vec<BookView>, UpstreamError> {
        let delay = {
            let mut state = self.state();
            state.fetch_count += 1;
            state.delay
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let state = self.state();
        if let Some(reason) = &state.fail_with {
            return Err(UpstreamError::Unavailable(reason.clone()));
        }
        Ok(state.books.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_books_in_order() {
        let books = vec![BookView::new(0, "A", 3), BookView::new(1, "B", 9)];
        let client = InMemoryBookClient::with_books(books.clone());
        assert_eq!(client.fetch_all().await.unwrap(), books);
        assert_eq!(client.fetch_count(), 1);
    }

    #[tokio::test]
    async fn failure_toggle() {
        let client = InMemoryBookClient::with_books(vec![BookView::new(0, "A", 3)]);
        client.set_failure(Some("connection refused"));

        let err = client.fetch_all().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Unavailable(ref r) if r == "connection refused"));

        client.set_failure(None);
        assert_eq!(client.fetch_all().await.unwrap().len(), 1);
        assert_eq!(client.fetch_count(), 2);
    }
}
