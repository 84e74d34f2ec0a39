use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::import::{
    ImportProductsParams, ImportProductsUseCase, ImportReport, ImportRowError, ImportRowResult,
};

/// One line of the import file. `ProductId` may be present and is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ProductCsvRow {
    name: String,
    price: String,
    provider: String,
    #[serde(default)]
    store_ids: Option<String>,
}

impl ProductCsvRow {
    fn into_params(self) -> Result<CreateProductParams, ImportRowError> {
        let price = BigDecimal::from_str(&self.price).map_err(|_| ImportRowError::InvalidPrice)?;
        let store_ids = parse_store_ids(self.store_ids.as_deref().unwrap_or_default())?;

        Ok(CreateProductParams {
            name: self.name,
            price,
            provider: self.provider,
            store_ids,
        })
    }
}

/// Store ids inside one cell are separated by `;` (or `,` when the cell is quoted).
fn parse_store_ids(value: &str) -> Result<Vec<i32>, ImportRowError> {
    value
        .split([';', ','])
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| id.parse::<i32>().map_err(|_| ImportRowError::InvalidStoreId))
        .collect()
}

/// Parses every data row independently, pairing it with its line number.
fn parse_rows(content: &[u8]) -> Vec<(u64, Result<CreateProductParams, ImportRowError>)> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content);

    let headers = match reader.byte_headers() {
        Ok(headers) => headers.clone(),
        Err(_) => return vec![(1, Err(ImportRowError::MalformedRow))],
    };

    let mut rows = Vec::new();
    let mut record = csv::ByteRecord::new();
    loop {
        match reader.read_byte_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map_or(0, |p| p.line());
                let parsed = record
                    .deserialize::<ProductCsvRow>(Some(&headers))
                    .map_err(|_| ImportRowError::MalformedRow)
                    .and_then(ProductCsvRow::into_params);
                rows.push((line, parsed));
            }
            Err(_) => {
                rows.push((reader.position().line(), Err(ImportRowError::MalformedRow)));
                break;
            }
        }
    }
    rows
}

pub struct ImportProductsUseCaseImpl {
    pub create_use_case: Arc<dyn CreateProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ImportProductsUseCase for ImportProductsUseCaseImpl {
    /// Each row is created through the single-create use case; a failing row
    /// is recorded and the import moves on to the next one.
    async fn execute(&self, params: ImportProductsParams) -> Result<ImportReport, ProductError> {
        if params.content.is_empty() {
            return Err(ProductError::EmptyImport);
        }

        let rows = parse_rows(&params.content);
        self.logger
            .info(&format!("Importing {} product rows", rows.len()));

        let mut report = ImportReport::default();
        for (line, parsed) in rows {
            let outcome = match parsed {
                Ok(create_params) => self
                    .create_use_case
                    .execute(create_params)
                    .await
                    .map(|product| product.id)
                    .map_err(ImportRowError::Create),
                Err(e) => Err(e),
            };

            if let Err(e) = &outcome {
                self.logger
                    .warn(&format!("Import row at line {} failed: {}", line, e));
            }
            report.rows.push(ImportRowResult { line, outcome });
        }

        self.logger.info(&format!(
            "Import finished: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        ));
        Ok(report)
    }
}
