use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identity. Equal to the document count at the moment of
/// insertion, so ids are 0-based, contiguous and follow insertion order.
pub type DocumentId = usize;

/// Fixed metadata record attached to every document. Deliberately not an
/// open key/value bag: the fields are named and validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub created_at: DateTime<Utc>,
    /// Position the document was inserted at; set by the store on commit.
    pub insertion_index: Option<usize>,
}

impl DocumentMeta {
    pub fn now() -> Self {
        Self {
            created_at: Utc::now(),
            insertion_index: None,
        }
    }
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self::now()
    }
}

/// A text document paired with its embedding vector. Immutable once the
/// store has accepted it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub text: String,
    pub meta: DocumentMeta,
    pub vector: Vec<f32>,
}

/// A document paired with its similarity score for one query. Produced by
/// search only; never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    pub document: Document,
    pub score: f64,
}
