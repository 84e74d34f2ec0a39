use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product, check_price, distinct_store_ids};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));
        check_price(&params.price).inspect_err(|_| {
            self.logger
                .warn(&format!("Rejected price {} for {}", params.price, params.name))
        })?;

        let new_product = NewProduct::new(params.name, params.price, params.provider);
        let store_ids = distinct_store_ids(&params.store_ids);

        let id = self.repository.create(&new_product, &store_ids).await?;

        self.logger.info(&format!(
            "Product created with id: {} ({} stores)",
            id,
            store_ids.len()
        ));
        Ok(new_product.into_product(id))
    }
}
