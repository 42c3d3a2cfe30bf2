//! Tag type for labeling notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A free-text label attached to a note.
///
/// Tags are flat strings used for filtering and search. Surrounding
/// whitespace is trimmed; case is preserved for display. Two tags are
/// equal only when their trimmed text matches exactly, so a note's tag
/// set collapses exact duplicates and nothing else.
///
/// # Examples
///
/// ```
/// use jot::domain::Tag;
///
/// let tag = Tag::new("  groceries ").unwrap();
/// assert_eq!(tag.as_str(), "groceries");
/// assert!(Tag::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty or whitespace-only
    /// after trimming.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
