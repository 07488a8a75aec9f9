//! Data model
//!
//! The two entities the store manages:
//! - [`Person`]: a gift recipient with identity, name, birthdate, and an
//!   owned, insertion-ordered list of ideas.
//! - [`Idea`]: a gift suggestion with description text plus a photo
//!   reference and its pixel dimensions. Immutable after creation.
//!
//! Collection ordering is insertion order. Display ordering (calendar
//! birthday order) is a view concern — see [`by_birthday`] — and is never
//! persisted.

use serde::{Deserialize, Serialize};

// =============================================================================
// Entities
// =============================================================================

/// A gift suggestion attached to a person
///
/// Ideas have no update operation: once created they are only ever
/// removed, either directly or when their owner is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    /// Unique id across the whole collection, not just within one person
    pub id: String,

    /// Short description text
    pub text: String,

    /// Photo reference (e.g. a file:// or content URI)
    pub img: String,

    /// Photo width in pixels
    pub width: f64,

    /// Photo height in pixels
    pub height: f64,
}

/// A gift recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique person id
    pub id: String,

    /// Display name; no uniqueness requirement
    pub name: String,

    /// Date of birth as a plain `YYYY-MM-DD` string, stored as given
    pub dob: String,

    /// Owned ideas in insertion order; new ideas append at the end
    pub ideas: Vec<Idea>,
}

impl Person {
    /// Create a person with no ideas yet
    pub fn new(id: impl Into<String>, name: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dob: dob.into(),
            ideas: Vec::new(),
        }
    }

    /// Look up an idea by id
    pub fn idea(&self, idea_id: &str) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id == idea_id)
    }

    /// Remove an idea by id, returning whether anything was removed
    pub fn remove_idea(&mut self, idea_id: &str) -> bool {
        let before = self.ideas.len();
        self.ideas.retain(|idea| idea.id != idea_id);
        self.ideas.len() != before
    }

    /// Calendar position of this person's birthday as (month, day)
    ///
    /// Returns `None` for a `dob` that is not `YYYY-MM-DD`; such people
    /// sort after everyone else in [`by_birthday`].
    pub fn birthday(&self) -> Option<(u32, u32)> {
        let mut parts = self.dob.splitn(3, '-');
        let _year = parts.next()?;
        let month: u32 = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some((month, day))
    }
}

// =============================================================================
// View Helpers
// =============================================================================

/// The collection sorted by calendar birthday: month first, then day
///
/// Year is ignored, matching a "whose birthday comes up next in the
/// calendar" listing. People with an unparseable `dob` sort last. The
/// stored collection is untouched; this is a read-only view.
pub fn by_birthday(people: &[Person]) -> Vec<Person> {
    let mut sorted: Vec<Person> = people.to_vec();
    sorted.sort_by_key(|p| p.birthday().unwrap_or((u32::MAX, u32::MAX)));
    sorted
}
