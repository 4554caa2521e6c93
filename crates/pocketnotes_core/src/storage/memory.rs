//! In-memory backend for tests and the smoke CLI.
//!
//! # Responsibility
//! - Mirror the file backend's observable behavior without touching disk.
//! - Round-trip through the JSON codec so document-shape bugs surface in
//!   unit tests too.

use super::{StorageBackend, StorageResult};
use crate::model::note::Note;

/// Volatile storage holding the serialized document in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-seeded with a raw document, valid or not.
    ///
    /// Lets tests exercise the corrupt-document recovery path.
    pub fn with_document(raw: impl Into<String>) -> Self {
        Self {
            document: Some(raw.into()),
        }
    }

    /// Raw serialized document, if any save has happened.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> StorageResult<Option<Vec<Note>>> {
        match self.document.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, notes: &[Note]) -> StorageResult<()> {
        self.document = Some(serde_json::to_string(notes)?);
        Ok(())
    }
}
