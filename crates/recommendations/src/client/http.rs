//! HTTP client for the book service.

use std::time::Duration;

use async_trait::async_trait;

use super::UpstreamClient;
use crate::error::UpstreamError;
use crate::view::BookView;

/// Where the book service lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Full URL of the book listing endpoint.
    pub url: String,
    /// Budget for establishing the connection.
    pub connect_timeout: Duration,
    /// Budget for reading the response once connected.
    pub read_timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Upper bound on one whole fetch.
    pub fn total_timeout(&self) -> Duration {
        self.connect_timeout + self.read_timeout
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/api/books".to_string(),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
        }
    }
}

/// Book service client over HTTP.
///
/// Owns its own `reqwest::Client` built from an explicit configuration;
/// nothing is shared process-wide.
#[derive(Debug, Clone)]
pub struct HttpBookClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpBookClient {
    /// Builds a client with the configured timeouts.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.total_timeout())
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }
}

#[async_trait]
impl UpstreamClient for HttpBookClient {
    #[tracing::instrument(skip(self), fields(url = %self.config.url))]
    async fn fetch_all(&self) -> Result<Vec<BookView>, UpstreamError> {
        let response = self.http.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let books: Option<Vec<BookView>> = serde_json::from_slice(&body)?;
        let books = books.unwrap_or_default();
        tracing::debug!(count = books.len(), "fetched books from upstream");
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budgets() {
        let config = UpstreamConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.read_timeout, Duration::from_secs(10));
        assert_eq!(config.total_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn new_overrides_only_url() {
        let config = UpstreamConfig::new("http://books-srv:3000/api/books");
        assert_eq!(config.url, "http://books-srv:3000/api/books");
        assert_eq!(config.read_timeout, Duration::from_secs(10));
    }

    #[test]
    fn client_keeps_its_config() {
        let client = HttpBookClient::new(UpstreamConfig::new("http://example.test/api/books"))
            .unwrap();
        assert_eq!(client.config().url, "http://example.test/api/books");
    }
}
