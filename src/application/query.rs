use crate::domain::entities::document::ScoredResult;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::store::VectorStore;
use std::sync::Arc;

pub struct QueryUseCase {
    store: Arc<VectorStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl QueryUseCase {
    pub fn new(store: Arc<VectorStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    /// Embed the query text and return the k most similar documents.
    pub async fn execute(&self, query: &str, k: usize) -> Result<Vec<ScoredResult>, DomainError> {
        // Skip the provider round-trip when there is nothing to rank.
        if self.store.is_empty() {
            return Ok(Vec::new());
        }

        let texts = [query.to_string()];
        let vectors = self.embedder.embed(&texts, InputType::Query).await?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Provider("provider returned no embedding".to_string()))?;

        self.store.search(&vector, k)
    }

    /// Search with an already-embedded query vector.
    pub fn execute_with_vector(
        &self,
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<ScoredResult>, DomainError> {
        self.store.search(vector, k)
    }
}
