//! Access to the book service, the recommendation service's only upstream.

pub mod http;
pub mod memory;

pub use http::{HttpBookClient, UpstreamConfig};
pub use memory::InMemoryBookClient;

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::view::BookView;

/// Trait for fetching the full catalog from the book service.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Fetches every book the book service holds, in the order it
    /// returns them. An absent collection is an empty list, not an error.
    async fn fetch_all(&self) -> Result<Vec<BookView>, UpstreamError>;
}
