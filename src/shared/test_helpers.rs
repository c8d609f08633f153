#[cfg(test)]
use std::{sync::Arc, time::Duration};

#[cfg(test)]
use sqlx::{any::AnyPoolOptions, AnyPool};

#[cfg(test)]
use crate::core::config::ProductServiceConfig;
#[cfg(test)]
use crate::features::categories::{CategoryService, CategoryState, ProductServiceClient};

#[cfg(test)]
const CREATE_CATEGORY_TABLE: &str =
    "CREATE TABLE category (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)";

/// Fresh in-memory SQLite database with an empty `category` table.
///
/// A single connection that never expires, since every new SQLite memory
/// connection is a separate database.
#[cfg(test)]
pub async fn create_test_pool() -> AnyPool {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(CREATE_CATEGORY_TABLE)
        .execute(&pool)
        .await
        .unwrap();

    pool
}

/// Handler state over `pool` talking to a product service at `product_service_url`
#[cfg(test)]
pub fn create_test_state(pool: AnyPool, product_service_url: &str) -> CategoryState {
    let products = ProductServiceClient::new(&ProductServiceConfig {
        base_url: product_service_url.to_string(),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    CategoryState {
        service: Arc::new(CategoryService::new(pool)),
        products: Arc::new(products),
        hostname: None,
    }
}

#[cfg(test)]
pub async fn count_categories(pool: &AnyPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM category")
        .fetch_one(pool)
        .await
        .unwrap()
}
