//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use giftr::error::{GiftrError, Result};
use giftr::{Config, GiftStore, IdGenerator, KvBackend, MemoryBackend};

// =============================================================================
// Deterministic Ids
// =============================================================================

/// Counter-based id generator so tests can predict ids
#[derive(Debug, Default)]
pub struct SeqIds(AtomicU64);

impl IdGenerator for SeqIds {
    fn new_id(&self) -> String {
        format!("id-{}", self.0.fetch_add(1, Ordering::Relaxed))
    }
}

// =============================================================================
// Failure-Injecting Backend
// =============================================================================

/// Memory backend with switchable write failures
///
/// `set` yields once before doing anything, widening the suspension
/// window so interleaving bugs have a chance to show up under the
/// single-thread test runtime.
#[derive(Debug, Default)]
pub struct FlakyBackend {
    inner: MemoryBackend,
    fail_writes: AtomicBool,
}

impl FlakyBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail (or succeed again)
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KvBackend for FlakyBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        tokio::task::yield_now().await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(GiftrError::Persistence("injected write failure".into()));
        }
        self.inner.set(key, value).await
    }
}

// =============================================================================
// Store Setup
// =============================================================================

/// Snapshot key every test store uses
pub const TEST_KEY: &str = "@giftr_people";

/// Store over the given backend with deterministic ids
pub fn store_over(backend: Arc<dyn KvBackend>) -> GiftStore {
    let config = Config::builder().snapshot_key(TEST_KEY).build();
    GiftStore::new(config, backend, Arc::new(SeqIds::default())).unwrap()
}

/// Fresh memory-backed store plus a handle on its backend
pub fn memory_store() -> (Arc<MemoryBackend>, GiftStore) {
    let backend = Arc::new(MemoryBackend::new());
    let store = store_over(backend.clone());
    (backend, store)
}

/// Fresh flaky-backed store plus a handle for failure injection
pub fn flaky_store() -> (Arc<FlakyBackend>, GiftStore) {
    let backend = Arc::new(FlakyBackend::new());
    let store = store_over(backend.clone());
    (backend, store)
}
