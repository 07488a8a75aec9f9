//! Snapshot format
//!
//! The whole collection persists as one JSON value under one backend key.
//!
//! ## Persisted Format
//!
//! ```text
//! {
//!   "schema_version": 1,
//!   "people": [
//!     { "id": "...", "name": "...", "dob": "YYYY-MM-DD",
//!       "ideas": [ { "id": "...", "text": "...", "img": "...",
//!                    "width": 300.0, "height": 450.0 } ] }
//!   ]
//! }
//! ```
//!
//! The original application stored a bare, unversioned JSON array of
//! people. [`decode`] still accepts that layout and migrates it on load,
//! so pre-existing data files keep working; [`encode`] always writes the
//! versioned envelope.

use serde::{Deserialize, Serialize};

use crate::error::{GiftrError, Result};
use crate::model::Person;

/// Version written by [`encode`]; the only envelope version understood
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned on-disk envelope
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    schema_version: u32,
    people: Vec<Person>,
}

// =============================================================================
// Encoding / Decoding
// =============================================================================

/// Encode the collection into the versioned snapshot string
pub fn encode(people: &[Person]) -> Result<String> {
    let envelope = Envelope {
        schema_version: SCHEMA_VERSION,
        people: people.to_vec(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Decode a snapshot string into the collection
///
/// Accepts the versioned envelope or the legacy bare array. A future
/// `schema_version` this build does not understand is an error rather
/// than a silent partial parse; `load()` turns that into the
/// degrade-to-empty policy.
pub fn decode(raw: &str) -> Result<Vec<Person>> {
    if let Ok(envelope) = serde_json::from_str::<Envelope>(raw) {
        if envelope.schema_version != SCHEMA_VERSION {
            return Err(GiftrError::Serialization(format!(
                "unsupported snapshot schema_version {} (this build understands {})",
                envelope.schema_version, SCHEMA_VERSION
            )));
        }
        return Ok(envelope.people);
    }

    // Legacy layout: unversioned top-level array of people
    Ok(serde_json::from_str::<Vec<Person>>(raw)?)
}
