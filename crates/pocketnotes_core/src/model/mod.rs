//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical data structure used by store and callers.
//! - Keep one record shape for both in-memory state and the persisted
//!   document.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard removal; there are no tombstones to reconcile
//!   because there is exactly one writer.

pub mod note;
