//! # giftr
//!
//! A personal gift-idea tracker core: people, their gift ideas, and a
//! durable entity store with:
//! - Write-through persistence (persist first, commit in memory second)
//! - A single-writer mutation queue (no lost updates across awaits)
//! - Degrade-to-empty startup (a broken snapshot never blocks the app)
//! - A versioned JSON snapshot format with legacy-array migration
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Presentation Layer                          │
//! │               (CLI / screens, external)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     GiftStore                                │
//! │            (Single Writer / Multi Reader)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Snapshot   │          │  Collection │
//!   │   (JSON)    │          │   (RwLock)  │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  KvBackend  │
//!   │ (file/mem)  │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod backend;
pub mod id;
pub mod model;
pub mod snapshot;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use config::Config;
pub use error::{GiftrError, Result};
pub use id::{IdGenerator, UuidGenerator};
pub use model::{Idea, Person};
pub use store::GiftStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of giftr
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
