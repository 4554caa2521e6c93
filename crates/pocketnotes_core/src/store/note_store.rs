//! The note store: canonical state plus persistence mediation.
//!
//! # Responsibility
//! - Own the authoritative in-memory collection and its canonical order.
//! - Commit the full collection through the storage backend after every
//!   mutation.
//!
//! # Invariants
//! - The collection handed to callers is always freshly sorted: pinned
//!   first, then `updated_at` descending within each group.
//! - No operation raises to its caller; unknown ids are silent no-ops and
//!   persistence failures leave the in-memory state authoritative for the
//!   session.
//! - `revision` strictly increases on every mutation, committed or not.

use crate::model::note::{now_ms, Note, NoteId};
use crate::storage::StorageBackend;
use log::{info, warn};

/// Partial field changes applied by [`NoteStore::update`].
///
/// `updated_at` is stamped with the current time unless the patch carries
/// an explicit value, which re-stamps recency programmatically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub updated_at: Option<i64>,
}

impl NotePatch {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn content(value: impl Into<String>) -> Self {
        Self {
            content: Some(value.into()),
            ..Self::default()
        }
    }
}

/// Authoritative, sorted note collection over a storage backend.
///
/// All reads and writes of persistent storage go through this type; callers
/// never touch the backend directly. Mutations are atomic per call under
/// the single-threaded event model of the hosting UI.
pub struct NoteStore<B: StorageBackend> {
    backend: B,
    notes: Vec<Note>,
    revision: u64,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Opens the store, loading the persisted collection once.
    ///
    /// A missing, malformed or unreadable document falls back to an empty
    /// collection. The failure is logged and swallowed: this is scratch
    /// content with no authoritative copy elsewhere, and an empty list is
    /// the correct degraded experience.
    pub fn open(backend: B) -> Self {
        let notes = match backend.load() {
            Ok(Some(notes)) => {
                info!(
                    "event=store_open module=store status=ok count={}",
                    notes.len()
                );
                notes
            }
            Ok(None) => {
                info!("event=store_open module=store status=ok count=0 mode=fresh");
                Vec::new()
            }
            Err(err) => {
                warn!("event=store_open module=store status=recovered error={err}");
                Vec::new()
            }
        };

        let mut store = Self {
            backend,
            notes,
            revision: 0,
        };
        store.resort();
        store
    }

    /// Current collection in canonical order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up one note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Monotonic change counter; callers re-render when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Creates an empty note and returns it so the caller can select it
    /// for editing immediately.
    pub fn create(&mut self) -> Note {
        let note = Note::new();
        let created = note.clone();
        self.notes.push(note);
        self.resort();
        self.commit("create");
        created
    }

    /// Applies a partial patch to the matching note.
    ///
    /// Stamps `updated_at` with the current time unless the patch supplies
    /// one explicitly. Unknown ids no-op silently; a caller that raced a
    /// delete against an edit needs no special handling.
    pub fn update(&mut self, id: NoteId, patch: NotePatch) {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return;
        };

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        match patch.updated_at {
            Some(explicit) => note.updated_at = explicit,
            None => note.touch(now_ms()),
        }

        self.resort();
        self.commit("update");
    }

    /// Removes the matching note. Unknown ids no-op silently, which makes
    /// delete idempotent.
    ///
    /// Removal cannot change the relative order of survivors, so there is
    /// no re-sort, but the truncated collection is still committed.
    pub fn delete(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return;
        }
        self.commit("delete");
    }

    /// Flips the pin flag of the matching note and stamps its recency.
    pub fn toggle_pin(&mut self, id: NoteId) {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return;
        };

        note.pinned = !note.pinned;
        note.touch(now_ms());
        self.resort();
        self.commit("toggle_pin");
    }

    /// Empties the collection and persists the empty state.
    ///
    /// Destructive-action confirmation is the caller's concern.
    pub fn clear_all(&mut self) {
        self.notes.clear();
        self.commit("clear_all");
    }

    /// Prepends the fixed demonstration notes ahead of existing content.
    ///
    /// Sample timestamps are staggered in the past so they interleave
    /// predictably with existing notes under the canonical order.
    pub fn import_sample(&mut self) {
        let now = now_ms();
        let mut samples = sample_notes(now);
        samples.append(&mut self.notes);
        self.notes = samples;
        self.resort();
        self.commit("import_sample");
    }

    fn resort(&mut self) {
        self.notes.sort_by(Note::canonical_cmp);
    }

    /// Writes the full collection through the backend, best effort.
    ///
    /// A failed write (quota, permissions, disabled storage) costs at most
    /// persistence for this session; the in-memory state keeps serving.
    fn commit(&mut self, operation: &str) {
        self.revision += 1;
        match self.backend.save(&self.notes) {
            Ok(()) => info!(
                "event=store_commit module=store status=ok op={operation} count={}",
                self.notes.len()
            ),
            Err(err) => warn!(
                "event=store_commit module=store status=skipped op={operation} error={err}"
            ),
        }
    }
}

/// The two pre-authored demonstration notes.
fn sample_notes(now: i64) -> Vec<Note> {
    vec![
        Note::with_parts(
            NoteId::new_v4(),
            "Welcome to Personal Notes",
            "This app persists your notes locally. Use the search bar to \
             filter by title or content.",
            now - 100_000,
            true,
        ),
        Note::with_parts(
            NoteId::new_v4(),
            "Ocean Professional Theme",
            "Primary: #2563EB, Secondary/Success: #F59E0B, Error: #EF4444. \
             Clean, minimalist layout with subtle shadows.",
            now - 80_000,
            false,
        ),
    ]
}
