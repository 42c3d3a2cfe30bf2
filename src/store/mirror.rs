//! Mirror: the durable copy of the note collection.
//!
//! The mirror is a replaceable collaborator holding the whole collection.
//! Reads are fail-soft (absent or corrupt data yields an empty collection);
//! writes replace the entire mirror content in one atomic step.

use crate::domain::Note;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during mirror writes.
///
/// Reads have no error type: the mirror contract is to yield an empty
/// collection for anything it cannot produce notes from.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize note collection: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The persistence collaborator beneath the note store.
///
/// Implementations replace the whole collection on every write; there is
/// no partial-update contract.
pub trait Mirror {
    /// Reads the persisted collection.
    ///
    /// Must tolerate absent or corrupt data by returning an empty
    /// collection. Never errors.
    fn read(&self) -> Vec<Note>;

    /// Replaces the persisted collection with `notes`.
    fn write(&mut self, notes: &[Note]) -> Result<(), MirrorError>;
}

/// A mirror backed by a single JSON file.
///
/// The file holds a JSON array of notes in the store's in-memory order.
/// Writes go through a temporary file and an atomic rename so a crash
/// mid-write cannot corrupt the mirror.
#[derive(Debug, Clone)]
pub struct JsonFileMirror {
    path: PathBuf,
}

impl JsonFileMirror {
    /// Creates a mirror for the given file path.
    ///
    /// The file need not exist yet; a missing file reads as an empty
    /// collection and is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the mirror file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl Mirror for JsonFileMirror {
    fn read(&self) -> Vec<Note> {
        // Absent file, unreadable file, invalid JSON, non-array content:
        // all collapse to an empty collection.
        match std::fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    fn write(&mut self, notes: &[Note]) -> Result<(), MirrorError> {
        let parent = self.parent_dir().to_path_buf();
        std::fs::create_dir_all(&parent).map_err(|e| MirrorError::Io {
            path: parent.clone(),
            source: e,
        })?;

        let content = serde_json::to_vec_pretty(notes)?;

        let mut temp = NamedTempFile::new_in(&parent).map_err(|e| MirrorError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        temp.write_all(&content).map_err(|e| MirrorError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        temp.persist(&self.path).map_err(|e| MirrorError::AtomicWrite {
            path: self.path.clone(),
            source: e.error,
        })?;

        Ok(())
    }
}

/// An in-memory mirror for tests and ephemeral use.
///
/// Keeps the written collection in memory and can be told to fail writes,
/// which is how the store's write-failure policy is exercised without a
/// real storage medium.
#[derive(Debug, Default)]
pub struct MemoryMirror {
    notes: Vec<Note>,
    fail_writes: bool,
}

impl MemoryMirror {
    /// Creates an empty in-memory mirror.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mirror pre-seeded with notes.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes,
            fail_writes: false,
        }
    }

    /// Makes subsequent writes fail (or succeed again).
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Returns the last successfully written collection.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

impl Mirror for MemoryMirror {
    fn read(&self) -> Vec<Note> {
        self.notes.clone()
    }

    fn write(&mut self, notes: &[Note]) -> Result<(), MirrorError> {
        if self.fail_writes {
            return Err(MirrorError::Io {
                path: PathBuf::from("<memory>"),
                source: io::Error::other("simulated write failure"),
            });
        }
        self.notes = notes.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn mirror_in(dir: &TempDir) -> JsonFileMirror {
        JsonFileMirror::new(dir.path().join("notes.json"))
    }

    #[test]
    fn read_missing_file_yields_empty() {
        let dir = TempDir::new().unwrap();
        let mirror = mirror_in(&dir);
        assert!(mirror.read().is_empty());
    }

    #[test]
    fn read_invalid_json_yields_empty() {
        let dir = TempDir::new().unwrap();
        let mirror = mirror_in(&dir);
        std::fs::write(mirror.path(), "{ not json").unwrap();
        assert!(mirror.read().is_empty());
    }

    #[test]
    fn read_non_array_json_yields_empty() {
        let dir = TempDir::new().unwrap();
        let mirror = mirror_in(&dir);
        std::fs::write(mirror.path(), r#"{"id": "nope"}"#).unwrap();
        assert!(mirror.read().is_empty());
    }

    #[test]
    fn write_then_read_roundtrips() {
        let dir = TempDir::new().unwrap();
        let mut mirror = mirror_in(&dir);
        let notes = vec![Note::create(Utc::now()), Note::create(Utc::now())];

        mirror.write(&notes).unwrap();
        assert_eq!(mirror.read(), notes);
    }

    #[test]
    fn write_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let mut mirror = mirror_in(&dir);
        mirror
            .write(&[Note::create(Utc::now()), Note::create(Utc::now())])
            .unwrap();

        let single = vec![Note::create(Utc::now())];
        mirror.write(&single).unwrap();
        assert_eq!(mirror.read(), single);
    }

    #[test]
    fn write_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let mut mirror = JsonFileMirror::new(dir.path().join("nested").join("notes.json"));
        mirror.write(&[]).unwrap();
        assert!(mirror.path().exists());
    }

    #[test]
    fn written_file_is_a_json_array() {
        let dir = TempDir::new().unwrap();
        let mut mirror = mirror_in(&dir);
        mirror.write(&[Note::create(Utc::now())]).unwrap();

        let raw = std::fs::read_to_string(mirror.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn memory_mirror_roundtrips() {
        let mut mirror = MemoryMirror::new();
        let notes = vec![Note::create(Utc::now())];
        mirror.write(&notes).unwrap();
        assert_eq!(mirror.read(), notes);
    }

    #[test]
    fn memory_mirror_can_fail_writes() {
        let mut mirror = MemoryMirror::new();
        mirror.fail_writes(true);
        let err = mirror.write(&[Note::create(Utc::now())]).unwrap_err();
        assert!(err.to_string().contains("simulated write failure"));
        assert!(mirror.notes().is_empty(), "failed write stores nothing");
    }
}
