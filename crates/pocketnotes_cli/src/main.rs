//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pocketnotes_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use pocketnotes_core::{MemoryStorage, NoteStore};

fn main() {
    // Why: exercise the store end-to-end against volatile storage so the
    // probe never touches a user's real note document.
    let mut store = NoteStore::open(MemoryStorage::new());
    store.import_sample();

    println!("pocketnotes_core version={}", pocketnotes_core::core_version());
    println!("sample_notes={}", store.notes().len());
    for note in store.notes() {
        println!("note pinned={} title={}", note.pinned, note.title);
    }
}
