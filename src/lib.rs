pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::ingest::IngestUseCase;
use crate::application::query::QueryUseCase;
use crate::config::{Config, ProviderKind};
use crate::domain::entities::document::{Document, DocumentId, ScoredResult};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::store::VectorStore;
use crate::infrastructure::embeddings::mock::MockProvider;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::embeddings::voyage::VoyageProvider;
use std::sync::Arc;

/// Facade over the store and the embedding provider: ingest text, query by
/// similarity. The store itself never talks to the provider.
pub struct SemSearch {
    ingest_uc: IngestUseCase,
    query_uc: QueryUseCase,
    store: Arc<VectorStore>,
}

impl SemSearch {
    /// Configure from `SEMSEARCH_EMBEDDING_*` environment variables. A
    /// remote provider without its API key is a fatal `Config` error, raised
    /// here before any store operation exists.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_config(Config::from_env()?)
    }

    pub fn from_config(config: Config) -> Result<Self, DomainError> {
        let embedder: Arc<dyn EmbeddingProvider> = match config.provider {
            ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(
                config.require_api_key()?,
                config.model.clone(),
            )),
            ProviderKind::Voyage => Arc::new(VoyageProvider::new(
                config.require_api_key()?,
                config.model.clone(),
                None,
            )),
            ProviderKind::Mock => Arc::new(MockProvider::default()),
        };
        Ok(Self::with_provider(embedder))
    }

    /// Wire an explicit provider. Tests use this with `MockProvider`.
    pub fn with_provider(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        let store = Arc::new(VectorStore::new());
        Self {
            ingest_uc: IngestUseCase::new(store.clone(), embedder.clone()),
            query_uc: QueryUseCase::new(store.clone(), embedder),
            store,
        }
    }

    pub async fn ingest(&self, text: String) -> Result<Document, DomainError> {
        self.ingest_uc.execute(text).await
    }

    pub async fn ingest_batch(&self, texts: Vec<String>) -> Result<Vec<Document>, DomainError> {
        self.ingest_uc.execute_batch(texts).await
    }

    pub async fn query(&self, text: &str, k: usize) -> Result<Vec<ScoredResult>, DomainError> {
        self.query_uc.execute(text, k).await
    }

    pub fn get(&self, id: DocumentId) -> Result<Document, DomainError> {
        self.store.get(id)
    }

    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Direct handle to the store for callers that embed externally.
    pub fn store(&self) -> &Arc<VectorStore> {
        &self.store
    }
}
