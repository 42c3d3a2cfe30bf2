//! View projection: the filtered, ordered subset of notes for a query.

use crate::domain::Note;

/// Computes the visible, ordered list of notes for a search query.
///
/// A note is visible iff the query is a case-insensitive substring of
/// its title, its content, or at least one of its tags. The empty query
/// matches everything.
///
/// Ordering: pinned notes first, then most-recently-updated first within
/// each group. The sort is stable, so `updated` ties keep their prior
/// relative order.
///
/// The result borrows from `notes`; recompute after any mutation.
pub fn project<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = query.trim().to_lowercase();
    let mut visible: Vec<&Note> = notes
        .iter()
        .filter(|note| needle.is_empty() || matches(note, &needle))
        .collect();
    visible.sort_by(|a, b| {
        b.pinned()
            .cmp(&a.pinned())
            .then(b.updated().cmp(&a.updated()))
    });
    visible
}

fn matches(note: &Note, needle: &str) -> bool {
    note.title().to_lowercase().contains(needle)
        || note.content().to_lowercase().contains(needle)
        || note
            .tags()
            .iter()
            .any(|tag| tag.as_str().to_lowercase().contains(needle))
}
