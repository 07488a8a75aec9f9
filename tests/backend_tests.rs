//! Tests for the backend implementations
//!
//! These tests verify:
//! - get/set semantics of the memory and file backends
//! - Missing keys read as None
//! - File-backed values survive a reopen
//! - Keys with path separators stay inside the data directory

use giftr::{FileBackend, KvBackend, MemoryBackend};
use tempfile::TempDir;

// =============================================================================
// Memory Backend
// =============================================================================

#[tokio::test]
async fn memory_missing_key_is_none() {
    let backend = MemoryBackend::new();
    assert_eq!(backend.get("missing").await.unwrap(), None);
}

#[tokio::test]
async fn memory_set_get_overwrite() {
    let backend = MemoryBackend::new();
    backend.set("k", "v1".into()).await.unwrap();
    assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("v1"));

    backend.set("k", "v2".into()).await.unwrap();
    assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("v2"));
}

#[tokio::test]
async fn memory_with_entries_seeds_values() {
    let backend = MemoryBackend::with_entries([("a", "1"), ("b", "2")]);
    assert_eq!(backend.get("a").await.unwrap().as_deref(), Some("1"));
    assert_eq!(backend.get("b").await.unwrap().as_deref(), Some("2"));
    assert_eq!(backend.get("c").await.unwrap(), None);
}

// =============================================================================
// File Backend
// =============================================================================

#[tokio::test]
async fn file_missing_key_is_none() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();
    assert_eq!(backend.get("missing").await.unwrap(), None);
}

#[tokio::test]
async fn file_set_get_overwrite() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    backend.set("@giftr_people", "[]".into()).await.unwrap();
    assert_eq!(
        backend.get("@giftr_people").await.unwrap().as_deref(),
        Some("[]")
    );

    backend
        .set("@giftr_people", r#"[{"x":1}]"#.into())
        .await
        .unwrap();
    assert_eq!(
        backend.get("@giftr_people").await.unwrap().as_deref(),
        Some(r#"[{"x":1}]"#)
    );
}

#[tokio::test]
async fn file_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let backend = FileBackend::open(dir.path()).unwrap();
        backend.set("k", "durable".into()).await.unwrap();
    }

    let reopened = FileBackend::open(dir.path()).unwrap();
    assert_eq!(reopened.get("k").await.unwrap().as_deref(), Some("durable"));
}

#[tokio::test]
async fn file_keys_with_separators_stay_in_data_dir() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    backend.set("../escape/attempt", "v".into()).await.unwrap();
    assert_eq!(
        backend.get("../escape/attempt").await.unwrap().as_deref(),
        Some("v")
    );

    // The value landed inside the data dir, not beside it
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|p| p.parent() == Some(dir.path())));
}

#[tokio::test]
async fn file_no_tmp_file_left_behind() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();
    backend.set("k", "v".into()).await.unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
