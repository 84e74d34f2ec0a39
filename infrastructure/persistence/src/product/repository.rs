use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductSearch;

use super::entity::ProductEntity;
use crate::db::database_error;
use crate::store::associations;

/// Product adapter backed by the catalog's stored functions.
pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT product_id, name, price, provider FROM get_products()",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("get_products"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT product_id, name, price, provider FROM get_product_by_id($1)",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("get_product_by_id"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn search(&self, search: &ProductSearch) -> Result<Vec<Product>, RepositoryError> {
        // Sort field and order are allow-listed enums by the time they get here.
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT product_id, name, price, provider FROM search_products($1, $2, $3, $4, $5)",
        )
        .bind(search.sort_field.as_ref())
        .bind(search.sort_order.as_ref())
        .bind(&search.name_filter)
        .bind(search.page.number())
        .bind(search.page.size())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("search_products"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn create(&self, product: &NewProduct, store_ids: &[i32]) -> Result<i32, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("begin"))?;

        let id: i32 = sqlx::query_scalar("SELECT add_product($1, $2, $3)")
            .bind(&product.name)
            .bind(&product.price)
            .bind(&product.provider)
            .fetch_one(&mut *tx)
            .await
            .map_err(database_error("add_product"))?;

        associations::insert_for_product(&mut tx, id, store_ids)
            .await
            .map_err(database_error("insert_product_stores"))?;

        tx.commit().await.map_err(database_error("commit"))?;

        Ok(id)
    }

    async fn update(&self, product: &Product, store_ids: &[i32]) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("begin"))?;

        sqlx::query("SELECT update_product($1, $2, $3, $4)")
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.price)
            .bind(&product.provider)
            .execute(&mut *tx)
            .await
            .map_err(database_error("update_product"))?;

        let removed = associations::delete_for_product(&mut tx, product.id)
            .await
            .map_err(database_error("delete_product_stores"))?;

        associations::insert_for_product(&mut tx, product.id, store_ids)
            .await
            .map_err(database_error("insert_product_stores"))?;

        tx.commit().await.map_err(database_error("commit"))?;

        tracing::debug!(
            product_id = product.id,
            removed,
            added = store_ids.len(),
            "replaced product store associations"
        );
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        // Association rows go with the product through ON DELETE CASCADE.
        sqlx::query("SELECT delete_product($1)")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("delete_product"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    const CONTRACT: &str = include_str!("../../sql/products.sql");

    #[test]
    fn should_ship_every_stored_function_the_adapter_calls() {
        for function in [
            "get_products(",
            "get_product_by_id(",
            "search_products(",
            "add_product(",
            "update_product(",
            "delete_product(",
        ] {
            assert!(
                CONTRACT.contains(&format!("FUNCTION {function}")),
                "missing stored function {function}"
            );
        }
    }

    #[test]
    fn should_compute_search_offset_in_bigint() {
        let offset = CONTRACT
            .lines()
            .map(str::trim)
            .find(|line| line.starts_with("OFFSET"))
            .expect("search_products has an OFFSET clause");

        // int4 * int4 overflows once page_number * page_size passes i32::MAX.
        assert!(offset.contains("::bigint"), "offset not widened: {offset}");
    }

    #[test]
    fn should_cascade_association_rows_on_product_delete() {
        assert!(CONTRACT.contains("REFERENCES products (product_id) ON DELETE CASCADE"));
    }
}
