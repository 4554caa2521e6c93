//! Note domain model.
//!
//! # Responsibility
//! - Define the sole persisted record of the application.
//! - Own the canonical comparator used for every presented list.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at` never changes after construction.
//! - Canonical order is pinned-first, then `updated_at` descending, with
//!   `id` ascending as a deterministic tiebreak.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for one note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// One user-authored piece of text with title, content and metadata.
///
/// Serialized field names match the persisted document layout
/// (`{id, title, content, createdAt, updatedAt, pinned}`). Records written
/// before the pin feature existed carry no `pinned` field; those load as
/// unpinned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable id assigned at creation, immutable.
    pub id: NoteId,
    /// Free-form title, may be empty.
    pub title: String,
    /// Free-form body, may be empty.
    pub content: String,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
    /// Unix epoch milliseconds, secondary sort key.
    pub updated_at: i64,
    /// Promotes the note to the priority group at the top of the list.
    #[serde(default)]
    pub pinned: bool,
}

impl Note {
    /// Creates an empty note stamped with the current time.
    ///
    /// # Invariants
    /// - `created_at == updated_at` at creation.
    /// - `pinned` starts as `false`.
    pub fn new() -> Self {
        let now = now_ms();
        Self::with_parts(Uuid::new_v4(), "", "", now, false)
    }

    /// Creates a note from caller-provided parts.
    ///
    /// Used by the sample-import path where timestamps are deliberately
    /// staggered in the past.
    pub fn with_parts(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        timestamp_ms: i64,
        pinned: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at: timestamp_ms,
            updated_at: timestamp_ms,
            pinned,
        }
    }

    /// Stamps `updated_at` without ever moving it backwards.
    ///
    /// A backwards system clock must not break the per-note monotonicity
    /// invariant. Explicit programmatic re-stamps go through the update
    /// patch instead.
    pub fn touch(&mut self, now: i64) {
        self.updated_at = self.updated_at.max(now);
    }

    /// Canonical comparator: pinned first, most-recently-updated first,
    /// `id` ascending on ties.
    pub fn canonical_cmp(a: &Note, b: &Note) -> Ordering {
        b.pinned
            .cmp(&a.pinned)
            .then(b.updated_at.cmp(&a.updated_at))
            .then(a.id.cmp(&b.id))
    }

    /// Returns whether the note matches a case-insensitive substring query
    /// over title or content.
    pub fn matches_query(&self, lowercased_query: &str) -> bool {
        self.title.to_lowercase().contains(lowercased_query)
            || self.content.to_lowercase().contains(lowercased_query)
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}

/// Current wall-clock time in unix epoch milliseconds.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
