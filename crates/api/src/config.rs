//! Application configuration loaded from environment variables.

use std::time::Duration;

use recommendations::UpstreamConfig;

/// Default port of the book service.
pub const BOOK_SERVICE_PORT: u16 = 8080;

/// Default port of the recommendation service.
pub const RECOMMENDATION_SERVICE_PORT: u16 = 8081;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: per service)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `DATABASE_URL`: PostgreSQL URL for the book service; unset means
///   an in-memory store
/// - `BOOK_SERVICE_URL`: book listing URL used by the recommendation service
/// - `UPSTREAM_CONNECT_TIMEOUT_MS` / `UPSTREAM_READ_TIMEOUT_MS`: upstream
///   budgets (default: 5000 / 10000)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: Option<String>,
    pub book_service_url: String,
    pub upstream_connect_timeout: Duration,
    pub upstream_read_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_env_with_port(BOOK_SERVICE_PORT)
    }

    /// Loads configuration from environment variables, using `default_port`
    /// when `PORT` is unset or invalid.
    pub fn from_env_with_port(default_port: u16) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), default_port)
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, default_port: u16) -> Self {
        let defaults = Self::with_port(default_port);
        let millis = |key: &str, fallback: Duration| {
            lookup(key)
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(fallback)
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            book_service_url: lookup("BOOK_SERVICE_URL").unwrap_or(defaults.book_service_url),
            upstream_connect_timeout: millis(
                "UPSTREAM_CONNECT_TIMEOUT_MS",
                defaults.upstream_connect_timeout,
            ),
            upstream_read_timeout: millis("UPSTREAM_READ_TIMEOUT_MS", defaults.upstream_read_timeout),
        }
    }

    fn with_port(port: u16) -> Self {
        let upstream = UpstreamConfig::default();
        Self {
            host: "0.0.0.0".to_string(),
            port,
            log_level: "info".to_string(),
            database_url: None,
            book_service_url: upstream.url,
            upstream_connect_timeout: upstream.connect_timeout,
            upstream_read_timeout: upstream.read_timeout,
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the book service client configuration.
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig {
            url: self.book_service_url.clone(),
            connect_timeout: self.upstream_connect_timeout,
            read_timeout: self.upstream_read_timeout,
        }
    }

    /// Returns the deadline for one whole upstream fetch: the connect
    /// budget plus the read budget.
    pub fn fetch_deadline(&self) -> Duration {
        self.upstream().total_timeout()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_port(BOOK_SERVICE_PORT)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.database_url, None);
        assert_eq!(config.book_service_url, "http://localhost:8080/api/books");
        assert_eq!(config.upstream_connect_timeout, Duration::from_secs(5));
        assert_eq!(config.upstream_read_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9090,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_default_port_per_service() {
        let config = Config::from_lookup(lookup_from(&[]), RECOMMENDATION_SERVICE_PORT);
        assert_eq!(config.addr(), "0.0.0.0:8081");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(
            lookup_from(&[
                ("PORT", "3000"),
                ("DATABASE_URL", "postgres://localhost/books"),
                ("BOOK_SERVICE_URL", "http://books-srv:3000/api/books"),
                ("UPSTREAM_CONNECT_TIMEOUT_MS", "250"),
                ("UPSTREAM_READ_TIMEOUT_MS", "750"),
            ]),
            BOOK_SERVICE_PORT,
        );
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/books")
        );

        let upstream = config.upstream();
        assert_eq!(upstream.url, "http://books-srv:3000/api/books");
        assert_eq!(upstream.connect_timeout, Duration::from_millis(250));
        assert_eq!(upstream.read_timeout, Duration::from_millis(750));
        assert_eq!(config.fetch_deadline(), Duration::from_millis(1000));
    }

    #[test]
    fn test_fetch_deadline_follows_budgets() {
        assert_eq!(Config::default().fetch_deadline(), Duration::from_secs(15));

        let config = Config::from_lookup(
            lookup_from(&[("UPSTREAM_READ_TIMEOUT_MS", "30000")]),
            RECOMMENDATION_SERVICE_PORT,
        );
        assert_eq!(config.fetch_deadline(), Duration::from_secs(35));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(
            lookup_from(&[
                ("PORT", "not-a-port"),
                ("DATABASE_URL", ""),
                ("UPSTREAM_READ_TIMEOUT_MS", "-5"),
            ]),
            BOOK_SERVICE_PORT,
        );
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, None);
        assert_eq!(config.upstream_read_timeout, Duration::from_secs(10));
    }
}
