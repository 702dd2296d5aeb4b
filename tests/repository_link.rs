mod common;

use chrono::{Duration, Utc};
use serde_json::Value;
use snapurl::AppError;
use snapurl::domain::entities::ShortLink;
use snapurl::domain::repositories::LinkRepository;
use snapurl::infrastructure::persistence::{LocalLinkRepository, STORAGE_KEY};
use snapurl::infrastructure::storage::{FileStore, KeyValueStore, MemoryStore};
use std::sync::Arc;

fn link(alias: &str, url: &str) -> ShortLink {
    ShortLink::new(alias.to_string(), url.to_string(), Utc::now(), 30)
}

#[tokio::test]
async fn test_insert_then_find() {
    let repo = LocalLinkRepository::new(Arc::new(MemoryStore::new()));
    let created = link("abc123", "https://example.com");

    let inserted = repo.insert(created.clone()).await.unwrap();
    assert_eq!(inserted, created);

    let found = repo.find_by_alias("abc123").await.unwrap().unwrap();
    assert_eq!(found.original_url, created.original_url);
    assert_eq!(found.expires_at, created.expires_at);
    assert_eq!(found.created_at, created.created_at);
}

#[tokio::test]
async fn test_find_not_found() {
    let repo = LocalLinkRepository::new(Arc::new(MemoryStore::new()));

    let result = repo.find_by_alias("notfound").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_does_not_suffix_match() {
    let repo = LocalLinkRepository::new(Arc::new(MemoryStore::new()));
    repo.insert(link("xabc123", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.find_by_alias("abc123").await.unwrap().is_none());
}

#[tokio::test]
async fn test_expired_links_are_still_found() {
    let repo = LocalLinkRepository::new(Arc::new(MemoryStore::new()));
    let expired = ShortLink::new(
        "old111".to_string(),
        "https://example.com".to_string(),
        Utc::now() - Duration::hours(3),
        1,
    );
    repo.insert(expired).await.unwrap();

    let found = repo.find_by_alias("old111").await.unwrap().unwrap();
    assert!(found.is_expired());
}

#[tokio::test]
async fn test_duplicate_alias_rejected() {
    let repo = LocalLinkRepository::new(Arc::new(MemoryStore::new()));
    repo.insert(link("dup111", "https://first.example.com"))
        .await
        .unwrap();

    let result = repo.insert(link("dup111", "https://second.example.com")).await;

    assert!(matches!(result, Err(AppError::DuplicateAlias { .. })));

    let found = repo.find_by_alias("dup111").await.unwrap().unwrap();
    assert_eq!(found.original_url, "https://first.example.com");
}

#[tokio::test]
async fn test_insert_all_is_all_or_nothing() {
    let repo = LocalLinkRepository::new(Arc::new(MemoryStore::new()));
    repo.insert(link("taken1", "https://example.com"))
        .await
        .unwrap();

    let result = repo
        .insert_all(vec![
            link("fresh1", "https://a.example.com"),
            link("taken1", "https://b.example.com"),
        ])
        .await;

    assert!(matches!(result, Err(AppError::DuplicateAlias { .. })));
    assert!(repo.find_by_alias("fresh1").await.unwrap().is_none());
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_insert_all_rejects_duplicates_within_batch() {
    let repo = LocalLinkRepository::new(Arc::new(MemoryStore::new()));

    let result = repo
        .insert_all(vec![
            link("same11", "https://a.example.com"),
            link("same11", "https://b.example.com"),
        ])
        .await;

    assert!(matches!(result, Err(AppError::DuplicateAlias { .. })));
    assert!(repo.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_all_keeps_insertion_order() {
    let repo = LocalLinkRepository::new(Arc::new(MemoryStore::new()));
    repo.insert(link("first1", "https://1.example.com"))
        .await
        .unwrap();
    repo.insert_all(vec![
        link("second", "https://2.example.com"),
        link("third1", "https://3.example.com"),
    ])
    .await
    .unwrap();

    let aliases: Vec<_> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.alias)
        .collect();

    assert_eq!(aliases, vec!["first1", "second", "third1"]);
}

#[tokio::test]
async fn test_concurrent_inserts_keep_every_link() {
    let repo = Arc::new(LocalLinkRepository::new(Arc::new(MemoryStore::new())));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.insert(link(&format!("conc{:02}", i), "https://example.com"))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.list_all().await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_persisted_record_shape() {
    let store = Arc::new(MemoryStore::new());
    let repo = LocalLinkRepository::new(store.clone());
    repo.insert(link("shape1", "https://example.com"))
        .await
        .unwrap();

    let raw = store.get(STORAGE_KEY).await.unwrap().unwrap();
    let records: Value = serde_json::from_str(&raw).unwrap();

    let record = &records[0];
    assert_eq!(record["alias"], "shape1");
    assert_eq!(record["original"], "https://example.com");
    assert!(record["createdAt"].is_string());
    assert!(record["expiry"].is_string());
}

#[tokio::test]
async fn test_reads_existing_records() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            STORAGE_KEY,
            r#"[{"alias":"seed11","original":"https://example.com","createdAt":"2026-01-01T10:00:00Z","expiry":"2026-01-01T10:30:00Z"}]"#,
        )
        .await
        .unwrap();

    let repo = LocalLinkRepository::new(store);
    let found = repo.find_by_alias("seed11").await.unwrap().unwrap();

    assert_eq!(found.original_url, "https://example.com");
    assert_eq!(found.expires_at - found.created_at, Duration::minutes(30));
}

#[tokio::test]
async fn test_corrupt_data_is_a_storage_error() {
    let store = Arc::new(MemoryStore::new());
    store.set(STORAGE_KEY, "{not json").await.unwrap();

    let repo = LocalLinkRepository::new(store);

    assert!(matches!(
        repo.list_all().await,
        Err(AppError::Storage(_))
    ));
    assert!(matches!(
        repo.insert(link("new111", "https://example.com")).await,
        Err(AppError::Storage(_))
    ));
}

#[tokio::test]
async fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).await.unwrap();
        let repo = LocalLinkRepository::new(Arc::new(store));
        repo.insert(link("disk11", "https://example.com"))
            .await
            .unwrap();
    }

    let store = FileStore::open(dir.path()).await.unwrap();
    let repo = LocalLinkRepository::new(Arc::new(store));

    let found = repo.find_by_alias("disk11").await.unwrap().unwrap();
    assert_eq!(found.original_url, "https://example.com");
}

#[tokio::test]
async fn test_broken_store_propagates() {
    let repo = LocalLinkRepository::new(Arc::new(common::BrokenStore));

    assert!(matches!(
        repo.find_by_alias("abc123").await,
        Err(AppError::Storage(_))
    ));
}
