use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, check_price, distinct_store_ids};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    /// Overwrites every scalar field and replaces the full store list.
    /// An empty store list leaves the product without associations.
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError> {
        if params.path_id != params.id {
            self.logger.warn(&format!(
                "Rejected update: path id {} does not match body id {}",
                params.path_id, params.id
            ));
            return Err(ProductError::IdMismatch);
        }

        self.logger
            .info(&format!("Updating product: {}", params.id));
        check_price(&params.price).inspect_err(|_| {
            self.logger
                .warn(&format!("Rejected price {} for product {}", params.price, params.id))
        })?;

        let product =
            Product::from_repository(params.id, params.name, params.price, params.provider);
        let store_ids = distinct_store_ids(&params.store_ids);

        self.repository.update(&product, &store_ids).await?;

        self.logger.info(&format!(
            "Product updated: {} ({} stores)",
            product.id,
            store_ids.len()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::value_objects::ProductSearch;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
            async fn search(&self, search: &ProductSearch) -> Result<Vec<Product>, RepositoryError>;
            async fn create(&self, product: &NewProduct, store_ids: &[i32]) -> Result<i32, RepositoryError>;
            async fn update(&self, product: &Product, store_ids: &[i32]) -> Result<(), RepositoryError>;
            async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(path_id: i32, id: i32, store_ids: Vec<i32>) -> UpdateProductParams {
        UpdateProductParams {
            path_id,
            id,
            name: "Updated Widget".to_string(),
            price: BigDecimal::from_str("11.25").unwrap(),
            provider: "Acme".to_string(),
            store_ids,
        }
    }

    #[tokio::test]
    async fn should_replace_fields_and_stores_when_ids_match() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .withf(|product, store_ids| {
                product.id == 5
                    && product.name == "Updated Widget"
                    && product.price == BigDecimal::from_str("11.25").unwrap()
                    && store_ids.to_vec() == vec![2, 3]
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(5, 5, vec![2, 3])).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_clear_stores_when_list_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .withf(|_, store_ids| store_ids.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(5, 5, vec![])).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_update_when_path_and_body_ids_differ() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(5, 6, vec![1])).await;

        assert!(matches!(result.unwrap_err(), ProductError::IdMismatch));
    }

    #[tokio::test]
    async fn should_reject_price_with_more_than_two_decimals() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut update = params(5, 5, vec![1]);
        update.price = BigDecimal::from_str("0.125").unwrap();
        let result = use_case.execute(update).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }

    #[tokio::test]
    async fn should_surface_database_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(5, 5, vec![7])).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
