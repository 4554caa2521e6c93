//! Store layer: the only writer of the note collection.
//!
//! # Responsibility
//! - Funnel every mutation through the named store operations.
//! - Keep callers decoupled from storage details behind the backend trait.
//!
//! # Invariants
//! - Presentation code never mutates notes directly; it calls operations
//!   and re-reads the sorted collection.

pub mod note_store;
