use crate::domain::entities::document::{Document, DocumentMeta};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::store::VectorStore;
use std::sync::Arc;

pub struct IngestUseCase {
    store: Arc<VectorStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl IngestUseCase {
    pub fn new(store: Arc<VectorStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    /// Embed one text and add it to the store.
    pub async fn execute(&self, text: String) -> Result<Document, DomainError> {
        let vectors = self
            .embedder
            .embed(std::slice::from_ref(&text), InputType::Document)
            .await?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Provider("provider returned no embedding".to_string()))?;

        let id = self.store.add(text, vector, DocumentMeta::now())?;
        self.store.get(id)
    }

    /// Embed a batch of texts in one provider call, then insert them in
    /// order. Follows the store's partial-commit policy: entries before a
    /// rejected one stay committed, and the rejection is returned as the
    /// error.
    pub async fn execute_batch(&self, texts: Vec<String>) -> Result<Vec<Document>, DomainError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let vectors = self.embedder.embed(&texts, InputType::Document).await?;
        if vectors.len() != texts.len() {
            return Err(DomainError::Provider(format!(
                "provider returned {} embeddings for {} texts",
                vectors.len(),
                texts.len()
            )));
        }

        let entries: Vec<_> = texts
            .into_iter()
            .zip(vectors)
            .map(|(text, vector)| (text, vector, DocumentMeta::now()))
            .collect();

        let ids = self.store.add_batch(entries).map_err(|e| e.source)?;
        ids.into_iter().map(|id| self.store.get(id)).collect()
    }
}
