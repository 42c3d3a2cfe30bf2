//! Command handlers.

mod list;
mod new;
mod rm;
mod show_edit;
mod tag;

pub use list::handle_list;
pub use new::handle_new;
pub use rm::handle_rm;
pub use show_edit::{handle_edit, handle_open, handle_show};
pub use tag::{handle_pin, handle_tag, handle_untag};

use anyhow::{Result, anyhow, bail};
use clap::CommandFactory;
use std::io;
use std::path::Path;

use crate::cli::state::UiState;
use crate::cli::{Cli, CompletionsArgs};
use crate::domain::NoteId;
use crate::store::{JsonFileMirror, NoteStore, Session};

/// Session type used by all handlers: a file-backed store plus the
/// selection restored from the UI-state sidecar.
pub(crate) type CliSession = Session<JsonFileMirror>;

/// Loads the store from the notes file and restores the persisted
/// selection (reconciliation fixes it up if the note is gone).
pub(crate) fn load_session(notes_file: &Path) -> CliSession {
    let store = NoteStore::load(JsonFileMirror::new(notes_file));
    let mut session = Session::new(store);

    let state = UiState::load(&UiState::path_for(notes_file));
    if let Some(id) = state.selected.and_then(|s| s.parse::<NoteId>().ok()) {
        session.select(&id);
    }
    session
}

/// Persists the selection for the next invocation. Best-effort: the
/// sidecar is UI state, so a failed save is not an error.
pub(crate) fn save_state(notes_file: &Path, session: &CliSession) {
    let state = UiState {
        selected: session.selected().map(|id| id.to_string()),
    };
    let _ = state.save(&UiState::path_for(notes_file));
}

/// Resolves a note reference (full id or unambiguous prefix) to an id,
/// defaulting to the open note when no reference is given.
pub(crate) fn resolve_ref(session: &CliSession, reference: Option<&str>) -> Result<NoteId> {
    match reference {
        Some(r) => {
            let matches = session.store().matching_prefix(r);
            match matches.len() {
                1 => Ok(matches[0].id().clone()),
                0 => bail!("no note matches '{r}'"),
                n => bail!("'{r}' is ambiguous ({n} notes match); use more characters"),
            }
        }
        None => session
            .selected()
            .cloned()
            .ok_or_else(|| anyhow!("no note is open; pass an id or run 'jot open'")),
    }
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "jot", &mut io::stdout());
    Ok(())
}
