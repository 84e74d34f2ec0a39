use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::store::repository::StoreRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_stores::GetProductStoresUseCaseImpl;
use business::application::product::import::ImportProductsUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::store::get_products::GetStoreProductsUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use business::domain::store::repository::StoreRepository;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::store::routes::StoreApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub store_api: StoreApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let store_repository = Arc::new(StoreRepositoryPostgres::new(pool));

        Self::with_repositories(product_repository, store_repository, Arc::new(TracingLogger))
    }

    /// Wires every use case and API on top of the given adapters.
    pub fn with_repositories(
        product_repository: Arc<dyn ProductRepository>,
        store_repository: Arc<dyn StoreRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        // Product use cases
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_stores_use_case = Arc::new(GetProductStoresUseCaseImpl {
            repository: product_repository.clone(),
            store_repository: store_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let import_use_case = Arc::new(ImportProductsUseCaseImpl {
            create_use_case: create_use_case.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Store use cases
        let get_store_products_use_case = Arc::new(GetStoreProductsUseCaseImpl {
            repository: store_repository,
            logger,
        });

        let product_api = ProductApi::new(
            search_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_stores_use_case,
            create_use_case,
            import_use_case,
            update_use_case,
            delete_use_case,
        );
        let store_api = StoreApi::new(get_store_products_use_case);

        Self {
            health_api: HealthApi,
            product_api,
            store_api,
        }
    }
}
