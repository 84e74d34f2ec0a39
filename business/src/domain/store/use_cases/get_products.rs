use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::store::errors::StoreError;

pub struct GetStoreProductsParams {
    pub store_id: i32,
}

#[async_trait]
pub trait GetStoreProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetStoreProductsParams) -> Result<Vec<Product>, StoreError>;
}
