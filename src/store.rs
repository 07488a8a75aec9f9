//! Entity Store
//!
//! The core of the crate: owns the in-memory collection of people (and
//! their nested ideas), exposes CRUD operations, and writes the full
//! collection through to the durable backend on every mutation.
//!
//! ## Responsibilities
//! - Hold the current snapshot and serve synchronous reads from it
//! - Serialize all mutations into one logical order
//! - Persist before committing, so memory never outruns durable state
//! - Degrade to an empty collection when the initial load fails

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::backend::KvBackend;
use crate::config::Config;
use crate::error::{GiftrError, Result};
use crate::id::IdGenerator;
use crate::model::{Idea, Person};
use crate::snapshot;

/// The gift-idea entity store
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
///
/// - **Mutations** (add/delete person or idea): serialized by `write_lock`
///   - Only ONE mutation at a time, held across the backend await
///   - Each mutation's read-current step therefore sees every prior
///     mutation's adopt-new step; two mutations can never compute from
///     the same stale snapshot (the lost-update hazard)
///   - `tokio::sync::Mutex` wakes waiters FIFO, so mutations apply in
///     arrival order
///
/// - **Reads** (`get_person`, `people`): concurrent, never suspend
///   - Take the `RwLock` briefly to clone an `Arc` of the snapshot
///   - Reads observe the last adopted snapshot, never an in-flight one
///
/// ## Write-Then-Commit
///
/// Every mutation runs read-current → compute-next → persist-next →
/// adopt-next. Persisting before adopting means a crash between the two
/// steps costs a redundant reload, never data loss or a phantom
/// in-memory-only record. A failed persist leaves both states unchanged.
pub struct GiftStore {
    /// Store configuration (snapshot key)
    config: Config,

    /// Durable backend; this store is the sole writer of its snapshot key
    backend: Arc<dyn KvBackend>,

    /// Identifier generator for fresh person/idea ids
    ids: Arc<dyn IdGenerator>,

    /// Current adopted snapshot (internal RwLock, cheap Arc clone out)
    people: RwLock<Arc<Vec<Person>>>,

    /// Serializes the whole mutation cycle (read/compute/persist/adopt)
    write_lock: Mutex<()>,
}

impl GiftStore {
    /// Create a store with an empty collection
    ///
    /// Call [`load`](Self::load) before mutating; until it completes the
    /// store behaves as if the collection were empty.
    pub fn new(
        config: Config,
        backend: Arc<dyn KvBackend>,
        ids: Arc<dyn IdGenerator>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            backend,
            ids,
            people: RwLock::new(Arc::new(Vec::new())),
            write_lock: Mutex::new(()),
        })
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Load the persisted snapshot into memory
    ///
    /// First run (no snapshot under the key) initializes an empty
    /// collection. A failed read or decode also initializes an empty
    /// collection and logs a warning instead of propagating: at startup
    /// there is no earlier caller to report to, and an empty-but-usable
    /// application beats a crashed one.
    ///
    /// Holds the writer lock for the whole cycle, so no mutation can
    /// interleave with the initial read.
    pub async fn load(&self) {
        let _guard = self.write_lock.lock().await;

        let people = match self.backend.get(&self.config.snapshot_key).await {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(people) => {
                    tracing::info!(
                        count = people.len(),
                        key = %self.config.snapshot_key,
                        "loaded snapshot"
                    );
                    people
                }
                Err(e) => {
                    tracing::warn!(
                        key = %self.config.snapshot_key,
                        error = %e,
                        "snapshot decode failed, starting with empty collection"
                    );
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::info!(
                    key = %self.config.snapshot_key,
                    "no snapshot found, starting with empty collection"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(
                    key = %self.config.snapshot_key,
                    error = %e,
                    "snapshot read failed, starting with empty collection"
                );
                Vec::new()
            }
        };

        *self.people.write() = Arc::new(people);
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a person with a fresh id and no ideas
    ///
    /// Returns the created person. On a persistence failure nothing
    /// changes, in memory or on disk.
    pub async fn add_person(
        &self,
        name: impl Into<String>,
        dob: impl Into<String>,
    ) -> Result<Person> {
        let _guard = self.write_lock.lock().await;

        let person = Person::new(self.ids.new_id(), name, dob);

        let mut next = self.current();
        next.push(person.clone());
        self.persist_then_adopt(next).await?;

        tracing::debug!(person_id = %person.id, "added person");
        Ok(person)
    }

    /// Add an idea to an existing person
    ///
    /// Fails with [`GiftrError::PersonNotFound`] if `person_id` is
    /// unknown; the collection is left untouched.
    pub async fn add_idea(
        &self,
        person_id: &str,
        text: impl Into<String>,
        img: impl Into<String>,
        width: f64,
        height: f64,
    ) -> Result<Idea> {
        let _guard = self.write_lock.lock().await;

        let idea = Idea {
            id: self.ids.new_id(),
            text: text.into(),
            img: img.into(),
            width,
            height,
        };

        let mut next = self.current();
        let person = next
            .iter_mut()
            .find(|p| p.id == person_id)
            .ok_or_else(|| GiftrError::PersonNotFound(person_id.to_string()))?;
        person.ideas.push(idea.clone());
        self.persist_then_adopt(next).await?;

        tracing::debug!(person_id, idea_id = %idea.id, "added idea");
        Ok(idea)
    }

    /// Delete an idea from a person
    ///
    /// Idempotent: an absent person or idea is a successful no-op, and
    /// nothing is written to the backend.
    pub async fn delete_idea(&self, person_id: &str, idea_id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut next = self.current();
        let removed = next
            .iter_mut()
            .find(|p| p.id == person_id)
            .is_some_and(|p| p.remove_idea(idea_id));
        if !removed {
            tracing::debug!(person_id, idea_id, "delete_idea: nothing to delete");
            return Ok(());
        }
        self.persist_then_adopt(next).await?;

        tracing::debug!(person_id, idea_id, "deleted idea");
        Ok(())
    }

    /// Delete a person and, with them, all their ideas
    ///
    /// Idempotent: an absent person is a successful no-op. Persists
    /// under the same snapshot key as every other mutation, so the
    /// deletion survives a restart.
    pub async fn delete_person(&self, person_id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut next = self.current();
        let before = next.len();
        next.retain(|p| p.id != person_id);
        if next.len() == before {
            tracing::debug!(person_id, "delete_person: nothing to delete");
            return Ok(());
        }
        self.persist_then_adopt(next).await?;

        tracing::debug!(person_id, "deleted person");
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Look up a person by id in the current snapshot
    ///
    /// Synchronous and non-suspending; returns `None` rather than an
    /// error for an unknown id.
    pub fn get_person(&self, person_id: &str) -> Option<Person> {
        self.people
            .read()
            .iter()
            .find(|p| p.id == person_id)
            .cloned()
    }

    /// Read-only view of the current collection, in insertion order
    pub fn people(&self) -> Arc<Vec<Person>> {
        self.people.read().clone()
    }

    /// Number of people in the current snapshot
    pub fn len(&self) -> usize {
        self.people.read().len()
    }

    /// Whether the current snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.people.read().is_empty()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Clone the current snapshot for a mutation to work on
    ///
    /// Caller must hold `write_lock`.
    fn current(&self) -> Vec<Person> {
        self.people.read().as_ref().clone()
    }

    /// Persist `next` to the backend, then adopt it in memory
    ///
    /// Caller must hold `write_lock`. An encode or backend failure
    /// returns before the adopt step, leaving the visible snapshot
    /// untouched.
    async fn persist_then_adopt(&self, next: Vec<Person>) -> Result<()> {
        let raw = snapshot::encode(&next)?;
        self.backend.set(&self.config.snapshot_key, raw).await?;
        *self.people.write() = Arc::new(next);
        Ok(())
    }
}
