#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
