//! Book recommendations for the recommendation service.
//!
//! This crate fetches the complete catalog from the book service and
//! serves it ordered by rating, highest first. Any failure to fetch is
//! reported as a single `UpstreamUnavailable` error; no partial result is
//! ever returned.

pub mod client;
pub mod error;
pub mod service;
pub mod view;

pub use client::{HttpBookClient, InMemoryBookClient, UpstreamClient, UpstreamConfig};
pub use error::{RecommendationError, UpstreamError};
pub use service::{RecommendationService, rank_by_rating};
pub use view::BookView;
