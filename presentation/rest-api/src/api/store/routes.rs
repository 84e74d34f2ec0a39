use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::store::use_cases::get_products::{
    GetStoreProductsParams, GetStoreProductsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductDto;
use crate::api::tags::ApiTags;

pub struct StoreApi {
    get_products_use_case: Arc<dyn GetStoreProductsUseCase>,
}

impl StoreApi {
    pub fn new(get_products_use_case: Arc<dyn GetStoreProductsUseCase>) -> Self {
        Self {
            get_products_use_case,
        }
    }
}

/// Store API
#[OpenApi]
impl StoreApi {
    /// Get the products a store carries
    #[oai(path = "/products/stores/:id", method = "get", tag = "ApiTags::Stores")]
    async fn get_store_products(&self, id: Path<i32>) -> GetStoreProductsResponse {
        match self
            .get_products_use_case
            .execute(GetStoreProductsParams { store_id: id.0 })
            .await
        {
            Ok(products) => {
                GetStoreProductsResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetStoreProductsResponse::NotFound,
                    _ => GetStoreProductsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStoreProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductDto>>),
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
