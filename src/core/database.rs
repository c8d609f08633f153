use crate::core::config::DatabaseConfig;
use sqlx::{any::AnyPoolOptions, AnyPool};
use std::time::Duration;

/// Create the shared pool. Default drivers are installed first so the same
/// `?`-placeholder statements run on MySQL in production and SQLite in tests.
pub async fn create_pool(config: &DatabaseConfig) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}
