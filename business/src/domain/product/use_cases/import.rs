use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct ImportProductsParams {
    pub content: Vec<u8>,
}

/// Why a single import row was not stored.
#[derive(Debug, thiserror::Error)]
pub enum ImportRowError {
    #[error("csv.malformed_row")]
    MalformedRow,
    #[error("csv.invalid_price")]
    InvalidPrice,
    #[error("csv.invalid_store_id")]
    InvalidStoreId,
    #[error("{0}")]
    Create(#[source] ProductError),
}

#[derive(Debug)]
pub struct ImportRowResult {
    /// 1-based line in the uploaded file; the header is line 1.
    pub line: u64,
    pub outcome: Result<i32, ImportRowError>,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub rows: Vec<ImportRowResult>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn succeeded(&self) -> usize {
        self.rows.iter().filter(|row| row.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }
}

#[async_trait]
pub trait ImportProductsUseCase: Send + Sync {
    async fn execute(&self, params: ImportProductsParams) -> Result<ImportReport, ProductError>;
}
