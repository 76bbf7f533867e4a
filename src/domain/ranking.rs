use crate::domain::entities::document::ScoredResult;
use std::cmp::Ordering;

/// Keep the k best results, highest score first. Entries with exactly equal
/// scores are ordered by ascending document id, so the same inputs always
/// produce the same output. `k == 0` yields an empty list.
///
/// A full sort is fine at the scale the store targets; a bounded heap would
/// have to preserve this exact ordering.
pub fn top_k(mut items: Vec<ScoredResult>, k: usize) -> Vec<ScoredResult> {
    if k == 0 {
        return Vec::new();
    }
    items.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.document.id.cmp(&b.document.id))
    });
    items.truncate(k);
    items
}
