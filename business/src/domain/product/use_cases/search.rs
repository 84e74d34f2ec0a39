use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Raw listing parameters as received from the client.
pub struct SearchProductsParams {
    pub sort_field: String,
    pub sort_order: String,
    pub name_filter: String,
    pub page_number: i32,
    pub page_size: i32,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError>;
}
