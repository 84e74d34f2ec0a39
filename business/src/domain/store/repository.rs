use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::product::model::Product;

use super::model::Store;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Store, RepositoryError>;
    /// Stores associated with a product, empty when it has none.
    async fn get_by_product(&self, product_id: i32) -> Result<Vec<Store>, RepositoryError>;
    /// Products carried by a store. `NotFound` when the store itself is absent.
    async fn get_products(&self, store_id: i32) -> Result<Vec<Product>, RepositoryError>;
}
