use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::value_objects::ProductSearch;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
    async fn search(&self, search: &ProductSearch) -> Result<Vec<Product>, RepositoryError>;
    /// Stores the product and its store associations atomically, returning the new id.
    async fn create(&self, product: &NewProduct, store_ids: &[i32]) -> Result<i32, RepositoryError>;
    /// Overwrites the product and replaces all of its store associations atomically.
    async fn update(&self, product: &Product, store_ids: &[i32]) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
