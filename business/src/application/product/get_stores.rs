use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_stores::{
    GetProductStoresParams, GetProductStoresUseCase,
};
use crate::domain::store::model::Store;
use crate::domain::store::repository::StoreRepository;

pub struct GetProductStoresUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub store_repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductStoresUseCase for GetProductStoresUseCaseImpl {
    /// `NotFound` only when the product is absent; a product without
    /// associations yields an empty list.
    async fn execute(&self, params: GetProductStoresParams) -> Result<Vec<Store>, ProductError> {
        self.logger
            .info(&format!("Fetching stores for product: {}", params.product_id));

        self.repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let stores = self
            .store_repository
            .get_by_product(params.product_id)
            .await?;

        self.logger.info(&format!(
            "Product {} is carried by {} stores",
            params.product_id,
            stores.len()
        ));
        Ok(stores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{NewProduct, Product};
    use crate::domain::product::value_objects::ProductSearch;
    use bigdecimal::BigDecimal;
    use mockall::mock;

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
        pub StoreRepo {}

        #[async_trait]
        impl StoreRepository for StoreRepo {
            async fn get_by_id(&self, id: i32) -> Result<Store, RepositoryError>;
            async fn get_by_product(&self, product_id: i32) -> Result<Vec<Store>, RepositoryError>;
            async fn get_products(&self, store_id: i32) -> Result<Vec<Product>, RepositoryError>;
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

    fn existing_product(id: i32) -> Product {
        Product::from_repository(id, "Widget".to_string(), BigDecimal::from(9), "Acme".to_string())
    }

    #[tokio::test]
    async fn should_return_associated_stores() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_store_repo = MockStoreRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(existing_product(id)));
        mock_store_repo
            .expect_get_by_product()
            .withf(|product_id| *product_id == 3)
            .returning(|_| {
                Ok(vec![
                    Store::from_repository(2, "Downtown".to_string()),
                    Store::from_repository(3, "Harbor".to_string()),
                ])
            });

        let use_case = GetProductStoresUseCaseImpl {
            repository: Arc::new(mock_repo),
            store_repository: Arc::new(mock_store_repo),
            logger: mock_logger(),
        };

        let stores = use_case
            .execute(GetProductStoresParams { product_id: 3 })
            .await
            .unwrap();

        let ids: Vec<i32> = stores.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_product_has_no_stores() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_store_repo = MockStoreRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(existing_product(id)));
        mock_store_repo
            .expect_get_by_product()
            .returning(|_| Ok(vec![]));

        let use_case = GetProductStoresUseCaseImpl {
            repository: Arc::new(mock_repo),
            store_repository: Arc::new(mock_store_repo),
            logger: mock_logger(),
        };

        let stores = use_case
            .execute(GetProductStoresParams { product_id: 3 })
            .await
            .unwrap();

        assert!(stores.is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_absent() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_store_repo = MockStoreRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_store_repo.expect_get_by_product().never();

        let use_case = GetProductStoresUseCaseImpl {
            repository: Arc::new(mock_repo),
            store_repository: Arc::new(mock_store_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductStoresParams { product_id: 77 })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
