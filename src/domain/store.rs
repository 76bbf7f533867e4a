use crate::domain::entities::document::{Document, DocumentId, DocumentMeta, ScoredResult};
use crate::domain::error::{BatchError, DomainError};
use crate::domain::ranking::top_k;
use crate::domain::similarity::cosine_similarity;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory, append-only document store searched by exact linear scan.
///
/// The vector dimension is fixed by the first successful insert; every later
/// vector must match it exactly. Mutation goes through a single write lock,
/// reads share a read lock, so a reader always sees a consistent snapshot
/// and never a half-inserted document.
pub struct VectorStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    documents: Vec<Document>,
    dimension: Option<usize>,
}

impl VectorStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                documents: Vec::new(),
                dimension: None,
            }),
        }
    }

    // Writers only ever push a fully constructed Document, so the data is
    // intact even if a panicking thread poisoned the lock.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a document. The new id equals the document count before the
    /// insert. Rejects the vector without touching the store when its length
    /// disagrees with the established dimension.
    pub fn add(
        &self,
        text: impl Into<String>,
        vector: Vec<f32>,
        meta: DocumentMeta,
    ) -> Result<DocumentId, DomainError> {
        let mut inner = self.write();
        if let Some(d) = inner.dimension {
            if vector.len() != d {
                return Err(DomainError::DimensionMismatch {
                    expected: d,
                    actual: vector.len(),
                });
            }
        }

        let id = inner.documents.len();
        let meta = DocumentMeta {
            insertion_index: Some(id),
            ..meta
        };
        inner.dimension = Some(vector.len());
        inner.documents.push(Document {
            id,
            text: text.into(),
            meta,
            vector,
        });
        Ok(id)
    }

    /// Insert entries in order, stopping at the first one that fails
    /// validation. Entries before the failure stay committed; the error
    /// carries their ids and the index of the rejected entry.
    pub fn add_batch(
        &self,
        entries: Vec<(String, Vec<f32>, DocumentMeta)>,
    ) -> Result<Vec<DocumentId>, BatchError> {
        let mut committed = Vec::with_capacity(entries.len());
        for (index, (text, vector, meta)) in entries.into_iter().enumerate() {
            match self.add(text, vector, meta) {
                Ok(id) => committed.push(id),
                Err(source) => {
                    return Err(BatchError {
                        committed,
                        failed_index: index,
                        source,
                    })
                }
            }
        }
        Ok(committed)
    }

    pub fn get(&self, id: DocumentId) -> Result<Document, DomainError> {
        self.read()
            .documents
            .get(id)
            .cloned()
            .ok_or(DomainError::NotFound(id))
    }

    pub fn get_vector(&self, id: DocumentId) -> Result<Vec<f32>, DomainError> {
        self.read()
            .documents
            .get(id)
            .map(|doc| doc.vector.clone())
            .ok_or(DomainError::NotFound(id))
    }

    /// Score every stored document against the query and return the top k,
    /// highest similarity first. An empty store yields an empty result; a
    /// `k` past the document count returns everything ranked.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredResult>, DomainError> {
        let inner = self.read();
        if inner.documents.is_empty() {
            return Ok(Vec::new());
        }
        if let Some(d) = inner.dimension {
            if query.len() != d {
                return Err(DomainError::DimensionMismatch {
                    expected: d,
                    actual: query.len(),
                });
            }
        }

        let mut scored = Vec::with_capacity(inner.documents.len());
        for doc in &inner.documents {
            let score = cosine_similarity(query, &doc.vector)?;
            scored.push(ScoredResult {
                document: doc.clone(),
                score,
            });
        }
        Ok(top_k(scored, k))
    }

    pub fn len(&self) -> usize {
        self.read().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Established vector dimension, `None` until the first insert.
    pub fn dimension(&self) -> Option<usize> {
        self.read().dimension
    }
}

impl Default for VectorStore {
    fn default() -> Self {
        Self::new()
    }
}
