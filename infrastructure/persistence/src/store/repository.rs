use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::store::model::Store;
use business::domain::store::repository::StoreRepository;

use super::entity::StoreEntity;
use crate::db::database_error;
use crate::product::entity::ProductEntity;

pub struct StoreRepositoryPostgres {
    pool: PgPool,
}

impl StoreRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for StoreRepositoryPostgres {
    async fn get_by_id(&self, id: i32) -> Result<Store, RepositoryError> {
        let entity = sqlx::query_as::<_, StoreEntity>(
            "SELECT store_id, name FROM stores WHERE store_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("get_store"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_product(&self, product_id: i32) -> Result<Vec<Store>, RepositoryError> {
        let entities = sqlx::query_as::<_, StoreEntity>(
            r#"SELECT s.store_id, s.name
            FROM product_stores ps
            JOIN stores s ON s.store_id = ps.store_id
            WHERE ps.product_id = $1
            ORDER BY s.store_id"#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("get_product_stores"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_products(&self, store_id: i32) -> Result<Vec<Product>, RepositoryError> {
        self.get_by_id(store_id).await?;

        let entities = sqlx::query_as::<_, ProductEntity>(
            r#"SELECT p.product_id, p.name, p.price, p.provider
            FROM product_stores ps
            JOIN products p ON p.product_id = ps.product_id
            WHERE ps.store_id = $1
            ORDER BY p.product_id"#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("get_store_products"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
