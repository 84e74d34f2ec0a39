use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::store::model::Store;

pub struct GetProductStoresParams {
    pub product_id: i32,
}

#[async_trait]
pub trait GetProductStoresUseCase: Send + Sync {
    async fn execute(&self, params: GetProductStoresParams) -> Result<Vec<Store>, ProductError>;
}
