//! Single-document JSON file backend.
//!
//! # Responsibility
//! - Persist the collection as one JSON array under a versioned key name.
//! - Keep writes atomic enough for a single-writer session (write then
//!   rename).
//!
//! # Invariants
//! - The document lives at `<dir>/pocketnotes.notes.v1.json`; the version
//!   marker is embedded in the key name, there is no in-document schema
//!   version.
//! - A missing document is not an error.

use super::{StorageBackend, StorageResult};
use crate::model::note::Note;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Versioned storage key. Bumping the schema means a new key name, with
/// old documents left untouched.
pub const STORAGE_KEY: &str = "pocketnotes.notes.v1";

/// File-backed storage holding the whole collection in one JSON document.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a backend storing the document inside `dir`.
    ///
    /// The directory is created lazily on first save, not here; opening a
    /// store against a read-only location must still succeed.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Full path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileStorage {
    fn load(&self) -> StorageResult<Option<Vec<Note>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("event=storage_load module=storage status=ok mode=missing");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let notes: Vec<Note> = serde_json::from_str(&raw)?;
        info!(
            "event=storage_load module=storage status=ok mode=file count={}",
            notes.len()
        );
        Ok(Some(notes))
    }

    fn save(&mut self, notes: &[Note]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string(notes)?;
        // Write-then-rename so a crash mid-write never leaves a truncated
        // document behind for the next load.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, raw)?;
        fs::rename(&tmp_path, &self.path)?;

        info!(
            "event=storage_save module=storage status=ok count={}",
            notes.len()
        );
        Ok(())
    }
}
