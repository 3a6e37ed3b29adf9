//! Book service entry point.

use api::config::{BOOK_SERVICE_PORT, Config};
use book_store::{InMemoryBookStore, PostgresBookStore};

#[tokio::main]
async fn main() {
    let config = Config::from_env_with_port(BOOK_SERVICE_PORT);

    // 1. Initialize tracing
    api::server::init_tracing(&config.log_level);

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 3. Pick the store and build the application
    let app = match config.database_url.as_deref() {
        Some(url) => {
            let store = PostgresBookStore::connect(url)
                .await
                .expect("failed to connect to database");
            store.run_migrations().await.expect("migrations failed");
            tracing::info!("using PostgreSQL book store");
            api::create_book_app(api::create_book_state(store), metrics_handle)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, books are kept in memory");
            api::create_book_app(
                api::create_book_state(InMemoryBookStore::new()),
                metrics_handle,
            )
        }
    };

    // 4. Serve
    api::server::serve(app, &config.addr(), "book-service")
        .await
        .expect("server error");
}
