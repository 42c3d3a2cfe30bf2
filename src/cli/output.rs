//! Output format types for CLI commands.

use crate::domain::Note;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: String,
    pub title: String,
    pub pinned: bool,
    pub tags: Vec<String>,
    pub updated: String,
    pub open: bool,
}

impl NoteListing {
    /// Builds a listing row from a note; `open` marks the selection.
    pub fn from_note(note: &Note, open: bool) -> Self {
        Self {
            id: note.id().to_string(),
            title: note.title().to_string(),
            pinned: note.pinned(),
            tags: note.tags().iter().map(|t| t.as_str().to_string()).collect(),
            updated: note.updated().to_rfc3339(),
            open,
        }
    }

    /// Renders the row as a single human-readable line.
    pub fn human_line(&self) -> String {
        let marker = if self.open { "*" } else { " " };
        let pin = if self.pinned { " [pinned]" } else { "" };
        let tags = if self.tags.is_empty() {
            String::new()
        } else {
            format!(" #{}", self.tags.join(" #"))
        };
        format!(
            "{marker} {}  {}{pin}{tags}",
            &self.id[..8],
            self.title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NoteId, Tag};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn listing(pinned: bool, tags: &[&str], open: bool) -> NoteListing {
        let note = Note::builder(NoteId::new(), Utc::now())
            .title("Grocery list")
            .pinned(pinned)
            .tags(tags.iter().map(|t| Tag::new(t).unwrap()).collect())
            .build();
        NoteListing::from_note(&note, open)
    }

    #[test]
    fn human_line_marks_open_note() {
        let line = listing(false, &[], true).human_line();
        assert!(line.starts_with("* "));
    }

    #[test]
    fn human_line_shows_pin_and_tags() {
        let line = listing(true, &["errands", "home"], false).human_line();
        assert!(line.contains("[pinned]"));
        assert!(line.contains("#errands #home"));
    }

    #[test]
    fn human_line_plain_note_has_no_annotations() {
        let line = listing(false, &[], false).human_line();
        assert!(!line.contains("[pinned]"));
        assert!(!line.contains('#'));
    }

    #[test]
    fn listing_serializes_full_id() {
        let row = listing(false, &[], false);
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["id"].as_str().unwrap().len(), 26);
        assert_eq!(value["title"], "Grocery list");
    }
}
