//! Persistence boundary for the note collection.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract the store commits
//!   through.
//! - Keep serialization and file-system details out of store logic.
//!
//! # Invariants
//! - `save` always writes the full collection; there are no partial or
//!   per-record writes.
//! - `load` distinguishes "no document yet" (`Ok(None)`) from a present
//!   document and from a failure; the policy of swallowing failures
//!   belongs to the store, not to backends.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::{JsonFileStorage, STORAGE_KEY};
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport error for collection load/save operations.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage io failure: {err}"),
            Self::Serde(err) => write!(f, "storage document failure: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Whole-collection persistence contract used by the note store.
pub trait StorageBackend {
    /// Reads the persisted collection.
    ///
    /// Returns `Ok(None)` when no document has been written yet.
    fn load(&self) -> StorageResult<Option<Vec<Note>>>;

    /// Replaces the persisted document with the given collection.
    fn save(&mut self, notes: &[Note]) -> StorageResult<()>;
}
