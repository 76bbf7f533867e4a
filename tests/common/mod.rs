//! Shared test helpers.

use semsearch::domain::entities::document::DocumentMeta;
use semsearch::infrastructure::embeddings::mock::MockProvider;
use semsearch::SemSearch;
use std::sync::Arc;

pub fn setup() -> SemSearch {
    SemSearch::with_provider(Arc::new(MockProvider::new(3)))
}

pub fn setup_with(provider: MockProvider) -> SemSearch {
    SemSearch::with_provider(Arc::new(provider))
}

pub fn meta() -> DocumentMeta {
    DocumentMeta::now()
}
