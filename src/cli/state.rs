//! UI-state sidecar: the selection persisted between invocations.
//!
//! The original interface kept "which note is open" in page state; a CLI
//! loses that between processes, so it lives in a small JSON file next to
//! the notes file. It is UI state, not note data: reads are fail-soft and
//! a failed save is never an error.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Transient UI state surviving between CLI invocations.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiState {
    /// Id of the open note, if any.
    pub selected: Option<String>,
}

impl UiState {
    /// Returns the sidecar path for a given notes file
    /// (`notes.json` -> `notes.state.json`).
    pub fn path_for(notes_file: &Path) -> PathBuf {
        notes_file.with_extension("state.json")
    }

    /// Loads the sidecar, defaulting on absent or corrupt content.
    pub fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Saves the sidecar.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let content = serde_json::to_vec(self)?;
        std::fs::write(path, content)
    }
}
