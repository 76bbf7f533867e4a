mod common;

use common::meta;
use semsearch::domain::error::DomainError;
use semsearch::domain::similarity::cosine_similarity;
use semsearch::domain::store::VectorStore;

#[test]
fn test_search_empty_store_returns_empty() {
    let store = VectorStore::new();
    let results = store.search(&[1.0, 0.0, 0.0], 5).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_search_wrong_query_dimension() {
    let store = VectorStore::new();
    store.add("doc", vec![1.0, 0.0, 0.0], meta()).unwrap();

    let err = store.search(&[1.0, 0.0], 5).unwrap_err();
    assert!(matches!(
        err,
        DomainError::DimensionMismatch { expected: 3, actual: 2 }
    ));
}

#[test]
fn test_search_k_larger_than_store_returns_all_ranked() {
    let store = VectorStore::new();
    store.add("a", vec![1.0, 0.0], meta()).unwrap();
    store.add("b", vec![0.0, 1.0], meta()).unwrap();
    store.add("c", vec![1.0, 1.0], meta()).unwrap();

    let results = store.search(&[1.0, 0.0], 100).unwrap();
    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_search_zero_k_returns_empty() {
    let store = VectorStore::new();
    store.add("a", vec![1.0, 0.0], meta()).unwrap();
    assert!(store.search(&[1.0, 0.0], 0).unwrap().is_empty());
}

#[test]
fn test_tie_break_prefers_earlier_insertion() {
    let store = VectorStore::new();
    // Same direction, different magnitude: identical cosine score.
    store.add("later is longer", vec![2.0, 0.0], meta()).unwrap();
    store.add("same angle", vec![4.0, 0.0], meta()).unwrap();
    store.add("orthogonal", vec![0.0, 1.0], meta()).unwrap();

    let results = store.search(&[1.0, 0.0], 3).unwrap();
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].document.id, 0);
    assert_eq!(results[1].document.id, 1);
    assert_eq!(results[2].document.id, 2);
}

#[test]
fn test_three_document_scenario() {
    let a = vec![1.0, 0.0, 0.0];
    let b = vec![0.9, 0.1, 0.0];
    let c = vec![0.0, 0.0, 1.0];

    assert!((cosine_similarity(&a, &b).unwrap() - 0.994).abs() < 1e-3);
    assert_eq!(cosine_similarity(&a, &c).unwrap(), 0.0);
    assert_eq!(cosine_similarity(&b, &c).unwrap(), 0.0);

    let store = VectorStore::new();
    store.add("doc a", a, meta()).unwrap();
    store.add("doc b", b, meta()).unwrap();
    store.add("doc c", c, meta()).unwrap();

    let results = store.search(&[1.0, 0.0, 0.0], 2).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document.text, "doc a");
    assert!((results[0].score - 1.0).abs() < 1e-9);
    assert_eq!(results[1].document.text, "doc b");
    assert!((results[1].score - 0.994).abs() < 1e-3);
}

#[test]
fn test_zero_vector_documents_score_zero() {
    let store = VectorStore::new();
    store.add("zero", vec![0.0, 0.0], meta()).unwrap();
    store.add("unit", vec![1.0, 0.0], meta()).unwrap();

    let results = store.search(&[1.0, 0.0], 2).unwrap();
    assert_eq!(results[0].document.text, "unit");
    assert_eq!(results[1].score, 0.0);
}
