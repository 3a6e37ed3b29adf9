//! Recommendation service ranking the upstream catalog by rating.

use std::time::Duration;

use crate::client::UpstreamClient;
use crate::error::{RecommendationError, Result, UpstreamError};
use crate::view::BookView;

/// Default deadline for a single upstream fetch.
pub const DEFAULT_FETCH_DEADLINE: Duration = Duration::from_secs(15);

/// Orders books by rating, highest first.
///
/// The sort is stable: books with equal ratings keep their relative
/// order. Books without a rating sort after every rated book.
pub fn rank_by_rating(books: &mut [BookView]) {
    books.sort_by(|a, b| b.rating.cmp(&a.rating));
}

/// Builds recommendations from the book service's catalog.
///
/// Each call fetches once and owns the fetched snapshot, so concurrent
/// calls share nothing and need no locking.
pub struct RecommendationService<C: UpstreamClient> {
    client: C,
    fetch_deadline: Duration,
}

impl<C: UpstreamClient> RecommendationService<C> {
    /// Creates a new recommendation service over the given client.
    pub fn new(client: C) -> Self {
        Self {
            client,
            fetch_deadline: DEFAULT_FETCH_DEADLINE,
        }
    }

    /// Overrides the deadline applied around every fetch, whatever the
    /// client's own timeouts.
    pub fn with_fetch_deadline(mut self, deadline: Duration) -> Self {
        self.fetch_deadline = deadline;
        self
    }

    /// Returns the deadline applied around every fetch.
    pub fn fetch_deadline(&self) -> Duration {
        self.fetch_deadline
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetches every book and returns them ordered by rating, descending.
    ///
    /// Fails with `UpstreamUnavailable` if the fetch fails for any reason.
    /// The fetch is never retried here.
    #[tracing::instrument(skip(self))]
    pub async fn recommend(&self) -> Result<Vec<BookView>> {
        let mut books = self.fetch().await.map_err(|err| {
            metrics::counter!("upstream_failures_total").increment(1);
            tracing::warn!(error = %err, "book service fetch failed");
            RecommendationError::UpstreamUnavailable(err)
        })?;

        rank_by_rating(&mut books);

        metrics::counter!("recommendations_served_total").increment(1);
        tracing::info!(count = books.len(), "recommendations served");
        Ok(books)
    }

    async fn fetch(&self) -> std::result::Result<Vec<BookView>, UpstreamError> {
        tokio::time::timeout(self.fetch_deadline, self.client.fetch_all())
            .await
            .map_err(|_| UpstreamError::TimedOut(self.fetch_deadline))?
    }
}
