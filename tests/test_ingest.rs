mod common;

use common::{setup, setup_with};
use semsearch::infrastructure::embeddings::mock::MockProvider;

#[tokio::test]
async fn test_ingest_assigns_sequential_ids() {
    let app = setup();
    let first = app.ingest("the cat sat on the mat".to_string()).await.unwrap();
    let second = app.ingest("a dog barked at the moon".to_string()).await.unwrap();

    assert_eq!(first.id, 0);
    assert_eq!(second.id, 1);
    assert_eq!(app.size(), 2);
}

#[tokio::test]
async fn test_ingest_batch() {
    let app = setup();
    let docs = app
        .ingest_batch(vec![
            "alpha".to_string(),
            "beta".to_string(),
            "gamma".to_string(),
        ])
        .await
        .unwrap();

    assert_eq!(docs.len(), 3);
    assert_eq!(docs[2].id, 2);
    assert_eq!(docs[2].text, "gamma");
    assert_eq!(app.size(), 3);
}

#[tokio::test]
async fn test_query_empty_store_returns_empty() {
    let app = setup();
    let results = app.query("anything", 5).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_identical_text_is_top_result() {
    let app = setup();
    app.ingest("rust is a systems language".to_string()).await.unwrap();
    app.ingest("pythons are large snakes".to_string()).await.unwrap();

    // The mock provider is deterministic, so the same text embeds to the
    // same vector and must rank first with similarity 1.0.
    let results = app.query("rust is a systems language", 2).await.unwrap();
    assert_eq!(results[0].document.text, "rust is a systems language");
    assert!((results[0].score - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_query_with_pinned_embeddings() {
    let provider = MockProvider::new(3)
        .with_embedding("doc a", vec![1.0, 0.0, 0.0])
        .with_embedding("doc b", vec![0.9, 0.1, 0.0])
        .with_embedding("doc c", vec![0.0, 0.0, 1.0])
        .with_embedding("the query", vec![1.0, 0.0, 0.0]);
    let app = setup_with(provider);

    app.ingest_batch(vec![
        "doc a".to_string(),
        "doc b".to_string(),
        "doc c".to_string(),
    ])
    .await
    .unwrap();

    let results = app.query("the query", 2).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document.text, "doc a");
    assert_eq!(results[1].document.text, "doc b");
    assert!((results[1].score - 0.994).abs() < 1e-3);
}

#[tokio::test]
async fn test_get_after_ingest() {
    let app = setup();
    let doc = app.ingest("remember me".to_string()).await.unwrap();

    let fetched = app.get(doc.id).unwrap();
    assert_eq!(fetched.text, "remember me");
    assert_eq!(fetched.meta.insertion_index, Some(doc.id));
}
