use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use poem_openapi::{Multipart, Object, types::multipart::Upload};

use business::domain::product::model::Product;
use business::domain::product::use_cases::import::{ImportReport, ImportRowResult};

/// Product transfer object used for both requests and responses.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductDto {
    /// Product identifier. Ignored on create; must match the path on update.
    #[oai(default)]
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub provider: String,
    /// Stores that carry the product. Only read on create and update.
    #[oai(skip_serializing_if_is_none)]
    pub store_ids: Option<Vec<i32>>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name,
            price: price_to_f64(&product.price),
            provider: product.provider,
            store_ids: None,
        }
    }
}

/// Largest magnitude whose two-decimal prices an `f64` still carries exactly
/// (15 significant digits).
const JSON_PRICE_LIMIT: f64 = 1e13;

/// Converts a JSON price into a decimal using its shortest round-trip form,
/// so `9.99` becomes exactly `9.99`. Non-finite values and magnitudes an
/// `f64` cannot carry to the cent are rejected.
pub fn price_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() || value.abs() >= JSON_PRICE_LIMIT {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

fn price_to_f64(price: &BigDecimal) -> f64 {
    price.to_f64().unwrap_or_default()
}

#[derive(Multipart)]
pub struct UploadProductsRequest {
    /// Comma-separated file with a `ProductId,Name,Price,Provider,StoreIds` header row.
    /// `StoreIds` holds `;`-separated store ids.
    pub file: Option<Upload>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ImportRowResponse {
    /// Line in the uploaded file (the header is line 1)
    pub line: u64,
    /// Id assigned to the created product
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<i32>,
    /// Why the row was not imported
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<ImportRowResult> for ImportRowResponse {
    fn from(row: ImportRowResult) -> Self {
        let (product_id, error) = match row.outcome {
            Ok(id) => (Some(id), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            line: row.line,
            product_id,
            error,
        }
    }
}

/// Outcome of a bulk upload, one entry per data row.
#[derive(Debug, Clone, Object)]
pub struct ImportReportResponse {
    pub message: String,
    pub total: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub results: Vec<ImportRowResponse>,
}

impl From<ImportReport> for ImportReportResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            message: "File processed successfully.".to_string(),
            total: report.total() as u64,
            succeeded: report.succeeded() as u64,
            failed: report.failed() as u64,
            results: report.rows.into_iter().map(Into::into).collect(),
        }
    }
}
