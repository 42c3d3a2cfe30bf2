//! Programmatic construction of seed notes with controlled timestamps.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use jot::domain::{Note, NoteId, Tag};

/// Builder for notes seeded directly into a test mirror.
///
/// Defaults to a fixed creation time so tests control ordering through
/// explicit `updated_at` values rather than wall-clock races.
pub struct TestNote {
    title: String,
    content: String,
    pinned: bool,
    tags: Vec<String>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl TestNote {
    /// Creates a test note with the given title and default timestamps.
    pub fn new(title: &str) -> Self {
        let base = ts("2024-01-01T00:00:00Z");
        Self {
            title: title.to_string(),
            content: String::new(),
            pinned: false,
            tags: Vec::new(),
            created: base,
            updated: base,
        }
    }

    /// Sets the note's content.
    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Marks the note pinned.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Sets the note's tags.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Sets the last-updated timestamp (RFC 3339).
    pub fn updated_at(mut self, rfc3339: &str) -> Self {
        self.updated = ts(rfc3339);
        self
    }

    /// Builds the domain note.
    pub fn to_note(&self) -> Note {
        Note::builder(NoteId::new(), self.created)
            .title(self.title.clone())
            .content(self.content.clone())
            .updated(self.updated)
            .pinned(self.pinned)
            .tags(
                self.tags
                    .iter()
                    .map(|t| Tag::new(t).expect("valid test tag"))
                    .collect(),
            )
            .build()
    }
}

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}
