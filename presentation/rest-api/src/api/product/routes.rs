use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::{Json, PlainText},
};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_stores::{
    GetProductStoresParams, GetProductStoresUseCase,
};
use business::domain::product::use_cases::import::{ImportProductsParams, ImportProductsUseCase};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::{DEFAULT_PAGE_SIZE, ProductSortField, SortOrder};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    ImportReportResponse, ProductDto, UploadProductsRequest, price_from_f64,
};
use crate::api::store::dto::StoreDto;
use crate::api::tags::ApiTags;

const EMPTY_UPLOAD_MESSAGE: &str = "File is empty or not provided.";

pub struct ProductApi {
    search_use_case: Arc<dyn SearchProductsUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_stores_use_case: Arc<dyn GetProductStoresUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    import_use_case: Arc<dyn ImportProductsUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        search_use_case: Arc<dyn SearchProductsUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_stores_use_case: Arc<dyn GetProductStoresUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        import_use_case: Arc<dyn ImportProductsUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_stores_use_case,
            create_use_case,
            import_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn invalid_price() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", "product.invalid_price"))
}

/// Product catalog API
///
/// Endpoints for listing, creating, importing, updating, and deleting products
/// and for reading their store associations.
#[OpenApi]
impl ProductApi {
    /// Search products
    ///
    /// Returns one page of products filtered by name and ordered by an
    /// allow-listed field. Pages hold ten products.
    ///
    /// - `sortField`: ProductId (default), Name, Price, or Provider
    /// - `sortOrder`: asc (default) or desc
    /// - `nameFilter`: case-insensitive substring of the product name
    /// - `pageNumber`: 1-based page number (default 1)
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
        #[oai(name = "sortField")]
        sort_field: Query<Option<String>>,
        #[oai(name = "sortOrder")]
        sort_order: Query<Option<String>>,
        #[oai(name = "nameFilter")]
        name_filter: Query<Option<String>>,
        #[oai(name = "pageNumber")]
        page_number: Query<Option<i32>>,
    ) -> SearchProductsResponse {
        let params = SearchProductsParams {
            sort_field: sort_field
                .0
                .unwrap_or_else(|| ProductSortField::default().as_ref().to_string()),
            sort_order: sort_order
                .0
                .unwrap_or_else(|| SortOrder::default().as_ref().to_string()),
            name_filter: name_filter.0.unwrap_or_default(),
            page_number: page_number.0.unwrap_or(1),
            page_size: DEFAULT_PAGE_SIZE,
        };

        match self.search_use_case.execute(params).await {
            Ok(products) => {
                SearchProductsResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchProductsResponse::BadRequest(json),
                    _ => SearchProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns every product without paging.
    #[oai(path = "/products/all", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                GetAllProductsResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i32>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound,
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the stores that carry a product
    ///
    /// Returns 404 when the product does not exist and an empty list when it
    /// exists without any store.
    #[oai(path = "/products/:id/stores", method = "get", tag = "ApiTags::Products")]
    async fn get_product_stores(&self, id: Path<i32>) -> GetProductStoresResponse {
        match self
            .get_stores_use_case
            .execute(GetProductStoresParams { product_id: id.0 })
            .await
        {
            Ok(stores) => {
                GetProductStoresResponse::Ok(Json(stores.into_iter().map(StoreDto::from).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductStoresResponse::NotFound,
                    _ => GetProductStoresResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Stores the product together with its store associations. Any
    /// `productId` in the body is ignored.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductDto>) -> CreateProductResponse {
        let body = body.0;
        let Some(price) = price_from_f64(body.price) else {
            return CreateProductResponse::BadRequest(invalid_price());
        };
        let store_ids = body.store_ids.clone();

        let params = CreateProductParams {
            name: body.name,
            price,
            provider: body.provider,
            store_ids: store_ids.clone().unwrap_or_default(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => {
                let location = format!("/products/{}", product.id);
                let mut created = ProductDto::from(product);
                created.store_ids = store_ids;
                CreateProductResponse::Created(Json(created), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Bulk upload products
    ///
    /// Imports a CSV file row by row. Rows that fail are listed in the
    /// report; the remaining rows are still imported.
    #[oai(path = "/products/upload", method = "post", tag = "ApiTags::Products")]
    async fn upload_products(&self, body: UploadProductsRequest) -> UploadProductsResponse {
        let Some(file) = body.file else {
            return UploadProductsResponse::BadRequest(PlainText(EMPTY_UPLOAD_MESSAGE.to_string()));
        };

        let content = match file.into_vec().await {
            Ok(content) => content,
            Err(_) => {
                return UploadProductsResponse::BadRequest(PlainText(
                    "File could not be read.".to_string(),
                ));
            }
        };

        match self
            .import_use_case
            .execute(ImportProductsParams { content })
            .await
        {
            Ok(report) => UploadProductsResponse::Ok(Json(report.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => {
                        UploadProductsResponse::BadRequest(PlainText(EMPTY_UPLOAD_MESSAGE.to_string()))
                    }
                    _ => UploadProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Overwrites every field and replaces the full list of stores. The body
    /// `productId` must match the path id.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(&self, id: Path<i32>, body: Json<ProductDto>) -> UpdateProductResponse {
        let body = body.0;
        let Some(price) = price_from_f64(body.price) else {
            return UpdateProductResponse::BadRequest(invalid_price());
        };

        let params = UpdateProductParams {
            path_id: id.0,
            id: body.product_id,
            name: body.name,
            price,
            provider: body.provider,
            store_ids: body.store_ids.unwrap_or_default(),
        };

        match self.update_use_case.execute(params).await {
            Ok(()) => UpdateProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Succeeds whether or not the product existed.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i32>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductDto>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductDto>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDto>),
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductStoresResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<StoreDto>>),
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductDto>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ImportReportResponse>),
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
