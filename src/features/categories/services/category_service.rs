use sqlx::AnyPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

/// Query layer over the `category` table.
///
/// Every database error, a missing row included, comes back as
/// `AppError::QueryFailure`. Dropping a returned future cancels the statement.
pub struct CategoryService {
    pool: AnyPool,
}

impl CategoryService {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Insert a category; the id is assigned by the database
    pub async fn add_category(&self, name: &str) -> Result<()> {
        sqlx::query("INSERT INTO category (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(AppError::QueryFailure)?;

        Ok(())
    }

    /// Delete by id. Matching no row is not an error.
    pub async fn delete_category(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM category WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::QueryFailure)?;

        tracing::debug!(
            "Deleted category {} ({} rows affected)",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    /// All categories in storage order
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::QueryFailure)
    }

    pub async fn get_category(&self, id: i64) -> Result<Category> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::QueryFailure)
    }

    /// Names are not unique, so this can return any number of rows
    pub async fn get_category_by_name(&self, name: &str) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE name = ?")
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::QueryFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::create_test_pool;
    use fake::{faker::lorem::en::Words, Fake};

    async fn service() -> CategoryService {
        CategoryService::new(create_test_pool().await)
    }

    #[tokio::test]
    async fn test_add_then_find_by_name() {
        let service = service().await;

        for _ in 0..10 {
            let words: Vec<String> = Words(1..4).fake();
            let name = words.join(" ");

            service.add_category(&name).await.unwrap();

            let found = service.get_category_by_name(&name).await.unwrap();
            assert!(!found.is_empty());
            assert!(found.iter().all(|c| c.name == name && c.id >= 0));
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_on_insert() {
        let service = service().await;
        service.add_category("Books").await.unwrap();
        service.add_category("Music").await.unwrap();

        let categories = service.get_categories().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_ne!(categories[0].id, categories[1].id);

        let books = service.get_category(categories[0].id).await.unwrap();
        assert_eq!(books.name, "Books");
    }

    #[tokio::test]
    async fn test_get_categories_empty_table() {
        let service = service().await;
        assert!(service.get_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_category_missing_id_fails() {
        let service = service().await;
        let result = service.get_category(12345).await;
        assert!(matches!(
            result,
            Err(AppError::QueryFailure(sqlx::Error::RowNotFound))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_names_are_all_returned() {
        let service = service().await;
        service.add_category("Toys").await.unwrap();
        service.add_category("Toys").await.unwrap();
        service.add_category("Tools").await.unwrap();

        let toys = service.get_category_by_name("Toys").await.unwrap();
        assert_eq!(toys.len(), 2);
        assert!(service.get_category_by_name("Food").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = service().await;
        service.add_category("Garden").await.unwrap();
        let id = service.get_categories().await.unwrap()[0].id;

        service.delete_category(id).await.unwrap();
        service.delete_category(id).await.unwrap();

        assert!(service.get_category(id).await.is_err());
    }

    #[tokio::test]
    async fn test_closed_pool_is_query_failure() {
        let pool = create_test_pool().await;
        pool.close().await;
        let service = CategoryService::new(pool);

        assert!(matches!(
            service.get_categories().await,
            Err(AppError::QueryFailure(_))
        ));
        assert!(matches!(
            service.add_category("Books").await,
            Err(AppError::QueryFailure(_))
        ));
    }
}
