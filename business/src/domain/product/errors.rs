#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.id_mismatch")]
    IdMismatch,
    #[error("product.invalid_sort_field")]
    InvalidSortField,
    #[error("product.invalid_sort_order")]
    InvalidSortOrder,
    #[error("product.invalid_page")]
    InvalidPage,
    #[error("product.empty_import")]
    EmptyImport,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
