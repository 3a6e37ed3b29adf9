//! Recommendation service entry point.

use api::config::{Config, RECOMMENDATION_SERVICE_PORT};
use recommendations::HttpBookClient;

#[tokio::main]
async fn main() {
    let config = Config::from_env_with_port(RECOMMENDATION_SERVICE_PORT);

    api::server::init_tracing(&config.log_level);

    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    let upstream = config.upstream();
    tracing::info!(
        url = %upstream.url,
        connect_timeout_ms = upstream.connect_timeout.as_millis() as u64,
        read_timeout_ms = upstream.read_timeout.as_millis() as u64,
        fetch_deadline_ms = config.fetch_deadline().as_millis() as u64,
        "book service client configured"
    );
    let client = HttpBookClient::new(upstream).expect("failed to build book service client");

    let app = api::create_recommendation_app(
        api::create_recommendation_state(client, config.fetch_deadline()),
        metrics_handle,
    );

    api::server::serve(app, &config.addr(), "recommendation-service")
        .await
        .expect("server error");
}
