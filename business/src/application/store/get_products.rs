use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::store::errors::StoreError;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::get_products::{
    GetStoreProductsParams, GetStoreProductsUseCase,
};

pub struct GetStoreProductsUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStoreProductsUseCase for GetStoreProductsUseCaseImpl {
    async fn execute(&self, params: GetStoreProductsParams) -> Result<Vec<Product>, StoreError> {
        self.logger
            .info(&format!("Fetching products for store: {}", params.store_id));

        let products = self
            .repository
            .get_products(params.store_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => StoreError::NotFound,
                other => StoreError::Repository(other),
            })?;

        Ok(products)
    }
}
