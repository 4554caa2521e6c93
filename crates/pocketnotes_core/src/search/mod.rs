//! Search and list-preview helpers for presentation callers.
//!
//! # Responsibility
//! - Provide the free-text filter applied on every query change.
//! - Keep result shaping (snippets) inside core.
//!
//! # Invariants
//! - Filtering never mutates or re-orders the collection; it narrows the
//!   already-canonical list.

pub mod filter;
