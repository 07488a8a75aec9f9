//! Identifier generation
//!
//! The store only needs opaque, practically collision-free string ids.
//! The generator sits behind a trait so tests can substitute a
//! deterministic sequence.

use uuid::Uuid;

/// Produces globally-unique string identifiers on demand
pub trait IdGenerator: Send + Sync {
    /// Generate a fresh identifier
    fn new_id(&self) -> String;
}

/// Default generator: random UUID v4, hyphenated lowercase
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
