//! Isolated test environment with a temp notes file.

#![allow(dead_code)]

use super::{JotCommand, TestNote};
use jot::domain::Note;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes file.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for seeding the mirror and reading it back.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes file (may not exist yet)
    notes_file: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    ///
    /// The notes file does not exist until seeded or written to by a
    /// command, which is exactly the first-run situation.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_file = temp_dir.path().join("notes.json");
        Self {
            _temp_dir: temp_dir,
            notes_file,
        }
    }

    /// Returns the path to the notes file.
    pub fn notes_file(&self) -> &Path {
        &self.notes_file
    }

    /// Returns the path to the UI-state sidecar.
    pub fn state_file(&self) -> PathBuf {
        self.notes_file.with_extension("state.json")
    }

    /// Seeds the mirror with the given notes, in mirror order.
    ///
    /// Returns the built notes so tests can refer to their ids.
    pub fn seed(&self, notes: &[TestNote]) -> Vec<Note> {
        let built: Vec<Note> = notes.iter().map(TestNote::to_note).collect();
        let json = serde_json::to_string_pretty(&built).expect("Failed to serialize seed notes");
        std::fs::write(&self.notes_file, json).expect("Failed to write seed notes");
        built
    }

    /// Writes raw bytes to the mirror (for corrupt-data tests).
    pub fn write_raw(&self, content: &str) {
        std::fs::write(&self.notes_file, content).expect("Failed to write raw mirror content");
    }

    /// Reads the mirror back as domain notes (empty if absent).
    pub fn read_notes(&self) -> Vec<Note> {
        match std::fs::read(&self.notes_file) {
            Ok(bytes) => serde_json::from_slice(&bytes).expect("mirror should hold valid notes"),
            Err(_) => Vec::new(),
        }
    }

    /// Reads the mirror back as raw JSON for field-level assertions.
    pub fn read_json(&self) -> serde_json::Value {
        let bytes = std::fs::read(&self.notes_file).expect("Failed to read notes file");
        serde_json::from_slice(&bytes).expect("Failed to parse notes file")
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new().file(&self.notes_file)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
