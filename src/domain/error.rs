use crate::domain::entities::document::DocumentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("document not found: {0}")]
    NotFound(DocumentId),

    #[error("embedding provider error: {0}")]
    Provider(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Failure of a batch insert. Entries before `failed_index` are committed
/// and stay in the store; `committed` holds their ids so callers can see
/// exactly how far the batch got.
#[derive(Debug, Error)]
#[error("batch insert stopped at entry {failed_index}: {source}")]
pub struct BatchError {
    pub committed: Vec<DocumentId>,
    pub failed_index: usize,
    #[source]
    pub source: DomainError,
}
