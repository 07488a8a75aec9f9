//! Durable Backend Module
//!
//! The opaque asynchronous string-keyed store the entity store persists
//! snapshots to.
//!
//! ## Responsibilities
//! - `get(key)` / `set(key, value)` with the backend's own failure modes
//! - Nothing else: no retries, no transactions, no schema knowledge
//!
//! The store treats a backend call as a terminal success or failure; any
//! timeout or retry policy lives inside the backend implementation.
//!
//! Two implementations ship with the crate:
//! - [`MemoryBackend`]: a process-local map, for tests and ephemeral runs
//! - [`FileBackend`]: one file per key under a data directory

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use async_trait::async_trait;

use crate::error::Result;

/// Asynchronous string-keyed durable store
///
/// Implementations must be safe to share across tasks; the entity store
/// holds one behind an `Arc` and is the sole writer of its snapshot key.
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key has never
    /// been written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: String) -> Result<()>;
}
