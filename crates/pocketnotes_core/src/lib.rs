//! Core note-store logic for Pocketnotes.
//! This crate is the single source of truth for collection invariants.

pub mod debounce;
pub mod logging;
pub mod model;
pub mod search;
pub mod storage;
pub mod store;

pub use debounce::{Debouncer, SAVE_DEBOUNCE};
pub use logging::{default_log_level, init_logging};
pub use model::note::{now_ms, Note, NoteId};
pub use search::filter::{filter_notes, snippet, SNIPPET_MAX_CHARS};
pub use storage::{
    JsonFileStorage, MemoryStorage, StorageBackend, StorageError, StorageResult, STORAGE_KEY,
};
pub use store::note_store::{NotePatch, NoteStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
