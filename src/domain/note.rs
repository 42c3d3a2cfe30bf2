//! Note struct: a titled, tagged, timestamped text record.

use crate::domain::{NoteId, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single note.
///
/// Notes are whole records in the JSON mirror. Fields are private and
/// mutated only through methods that keep the record's invariants:
///
/// - `updated() >= created()` at all times
/// - the tag set contains no exact duplicates (insertion order preserved)
/// - the title is never empty; blank input falls back to
///   [`Note::DEFAULT_TITLE`]
///
/// # Examples
///
/// ```
/// use jot::domain::Note;
/// use chrono::Utc;
///
/// let note = Note::create(Utc::now());
/// assert_eq!(note.title(), Note::DEFAULT_TITLE);
/// assert!(!note.pinned());
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    pinned: bool,
    tags: Vec<Tag>,
}

impl Note {
    /// Title given to notes created without one, and the fallback when an
    /// edit would leave the title blank.
    pub const DEFAULT_TITLE: &'static str = "Untitled Note";

    /// Creates a new note with a fresh id and defaulted fields.
    ///
    /// `created` and `updated` are both set to `now`.
    pub fn create(now: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::new(),
            title: Self::DEFAULT_TITLE.to_string(),
            content: String::new(),
            created: now,
            updated: now,
            pinned: false,
            tags: Vec::new(),
        }
    }

    /// Creates a builder for constructing a note with explicit fields.
    pub fn builder(id: NoteId, created: DateTime<Utc>) -> NoteBuilder {
        NoteBuilder::new(id, created)
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last updated.
    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    /// Returns whether the note is pinned.
    pub fn pinned(&self) -> bool {
        self.pinned
    }

    /// Returns the note's tags in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns true if the note carries the given tag.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Sets the title, normalizing blank input to the default title.
    pub fn set_title(&mut self, title: &str, now: DateTime<Utc>) {
        self.title = normalize_title(title);
        self.touch(now);
    }

    /// Sets the content.
    pub fn set_content(&mut self, content: &str, now: DateTime<Utc>) {
        self.content = content.to_string();
        self.touch(now);
    }

    /// Flips the pinned state.
    pub fn toggle_pin(&mut self, now: DateTime<Utc>) {
        self.pinned = !self.pinned;
        self.touch(now);
    }

    /// Adds a tag with set semantics.
    ///
    /// Re-adding an existing tag leaves the set unchanged but still counts
    /// as an update and refreshes `updated()`.
    pub fn add_tag(&mut self, tag: Tag, now: DateTime<Utc>) {
        if !self.has_tag(&tag) {
            self.tags.push(tag);
        }
        self.touch(now);
    }

    /// Removes a tag if present.
    ///
    /// Returns true (and refreshes `updated()`) only when the tag was
    /// actually removed.
    pub fn remove_tag(&mut self, tag: &Tag, now: DateTime<Utc>) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        if self.tags.len() != before {
            self.touch(now);
            return true;
        }
        false
    }

    // Clamped so updated never precedes created, even with a skewed clock.
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated = now.max(self.created);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("created", &self.created)
            .field("updated", &self.updated)
            .field("pinned", &self.pinned)
            .field("tags", &self.tags)
            .finish()
    }
}

/// Builder for constructing a Note with explicit fields.
///
/// Used when loading notes from the mirror and when tests need control
/// over timestamps. Normalization happens in `build`: blank titles fall
/// back to the default, duplicate tags collapse, and `updated` is clamped
/// to be no earlier than `created`.
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    content: String,
    created: DateTime<Utc>,
    updated: Option<DateTime<Utc>>,
    pinned: bool,
    tags: Vec<Tag>,
}

impl NoteBuilder {
    fn new(id: NoteId, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: Note::DEFAULT_TITLE.to_string(),
            content: String::new(),
            created,
            updated: None,
            pinned: false,
            tags: Vec::new(),
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the last-updated timestamp (defaults to `created`).
    pub fn updated(mut self, updated: DateTime<Utc>) -> Self {
        self.updated = Some(updated);
        self
    }

    /// Sets the pinned state.
    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Sets the tags. Exact duplicates are removed (first occurrence kept).
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = deduplicate_tags(tags);
        self
    }

    /// Builds the Note, applying normalization.
    pub fn build(self) -> Note {
        let updated = self.updated.unwrap_or(self.created).max(self.created);
        Note {
            id: self.id,
            title: normalize_title(&self.title),
            content: self.content,
            created: self.created,
            updated,
            pinned: self.pinned,
            tags: self.tags,
        }
    }
}

/// Trims the title, substituting the default for blank input.
fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Note::DEFAULT_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Removes exact duplicate tags (first occurrence kept).
fn deduplicate_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = Vec::new();
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        // Fixed wire shape: every field present, camelCase timestamp keys.
        let mut map = serializer.serialize_map(Some(7))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("content", &self.content)?;
        map.serialize_entry("createdAt", &self.created)?;
        map.serialize_entry("updatedAt", &self.updated)?;
        map.serialize_entry("pinned", &self.pinned)?;
        map.serialize_entry("tags", &self.tags)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct NoteHelper {
            id: NoteId,
            #[serde(default)]
            title: String,
            #[serde(default)]
            content: String,
            #[serde(rename = "createdAt")]
            created: DateTime<Utc>,
            #[serde(rename = "updatedAt")]
            updated: DateTime<Utc>,
            #[serde(default)]
            pinned: bool,
            #[serde(default)]
            tags: Vec<Tag>,
        }

        let helper = NoteHelper::deserialize(deserializer)?;

        Ok(Note::builder(helper.id, helper.created)
            .title(helper.title)
            .content(helper.content)
            .updated(helper.updated)
            .pinned(helper.pinned)
            .tags(helper.tags)
            .build())
    }
}
