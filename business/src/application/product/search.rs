use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::product::value_objects::{
    PageRequest, ProductSearch, ProductSortField, SortOrder,
};

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl SearchProductsUseCaseImpl {
    fn build_search(params: SearchProductsParams) -> Result<ProductSearch, ProductError> {
        Ok(ProductSearch {
            sort_field: ProductSortField::parse(&params.sort_field)?,
            sort_order: SortOrder::parse(&params.sort_order)?,
            name_filter: params.name_filter,
            page: PageRequest::new(params.page_number, params.page_size)?,
        })
    }
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError> {
        let search = Self::build_search(params).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected product search: {}", e));
        })?;

        self.logger.info(&format!(
            "Searching products: sort={} {}, filter='{}', page={} size={}",
            search.sort_field.as_ref(),
            search.sort_order.as_ref(),
            search.name_filter,
            search.page.number(),
            search.page.size()
        ));

        let products = self.repository.search(&search).await?;

        self.logger
            .debug(&format!("Search returned {} products", products.len()));
        Ok(products)
    }
}
