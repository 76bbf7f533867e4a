use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use std::collections::HashMap;

/// Deterministic offline provider. Hashes character codes into a
/// fixed-dimension vector and normalizes it, so equal texts always embed
/// identically. Tests can also pin exact vectors per text.
pub struct MockProvider {
    dimension: usize,
    canned: HashMap<String, Vec<f32>>,
}

impl MockProvider {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            canned: HashMap::new(),
        }
    }

    /// Pin the vector returned for an exact text.
    pub fn with_embedding(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.canned.insert(text.into(), vector);
        self
    }

    fn generate(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimension];
        for (i, c) in text.chars().enumerate() {
            vector[i % self.dimension] += (c as u32 % 100) as f32 / 100.0;
        }
        let magnitude: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for v in &mut vector {
                *v /= magnitude;
            }
        }
        vector
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(4)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for MockProvider {
    async fn embed(
        &self,
        texts: &[String],
        _input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts
            .iter()
            .map(|t| self.canned.get(t).cloned().unwrap_or_else(|| self.generate(t)))
            .collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
