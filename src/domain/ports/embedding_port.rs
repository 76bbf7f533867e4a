use crate::domain::error::DomainError;

/// Whether the text being embedded is stored material or a search query.
/// Some providers (Voyage) embed the two differently; others ignore it.
#[derive(Debug, Clone, Copy)]
pub enum InputType {
    Document,
    Query,
}

/// External capability turning text into fixed-length embedding vectors.
///
/// The store never calls this itself; callers embed first and hand the
/// vectors over, so provider failures (auth, rate limits, network) stay a
/// `DomainError::Provider` and never look like a store invariant violation.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, one vector per input, in input order. Vector
    /// length must be the same across every call for one provider instance.
    async fn embed(
        &self,
        texts: &[String],
        input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Vector length this provider produces.
    fn dimension(&self) -> usize;
}
