use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;

pub struct UpdateProductParams {
    /// Id addressed by the request path.
    pub path_id: i32,
    /// Id carried in the request body; must equal `path_id`.
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub provider: String,
    pub store_ids: Vec<i32>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError>;
}
