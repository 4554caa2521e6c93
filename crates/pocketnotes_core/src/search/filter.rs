//! Substring filtering and snippet derivation.
//!
//! # Responsibility
//! - Case-insensitive substring match over title and content.
//! - Single-line, char-capped previews for list rendering.
//!
//! # Invariants
//! - A blank or whitespace-only query filters nothing out.
//! - Query state is transient; it is never persisted.

use crate::model::note::Note;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Default char budget for list previews.
pub const SNIPPET_MAX_CHARS: usize = 100;

/// Narrows the canonical list to notes matching the query.
///
/// Matching is a case-insensitive substring check over title and content,
/// recomputed from scratch on every call; relative order is preserved.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return notes.iter().collect();
    }

    notes
        .iter()
        .filter(|note| note.matches_query(&needle))
        .collect()
}

/// Collapses text to one whitespace-normalized line capped at `max_chars`.
///
/// Truncation counts chars, not bytes, and appends an ellipsis when the
/// text was cut.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let normalized = WHITESPACE_RE.replace_all(text.trim(), " ");
    if normalized.chars().count() <= max_chars {
        return normalized.into_owned();
    }

    let mut capped: String = normalized.chars().take(max_chars.saturating_sub(1)).collect();
    capped.push('…');
    capped
}
