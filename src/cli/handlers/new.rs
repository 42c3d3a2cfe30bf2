//! New command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{load_session, save_state};
use crate::cli::NewArgs;
use crate::store::UpdateFields;

pub fn handle_new(args: &NewArgs, notes_file: &Path) -> Result<()> {
    let mut session = load_session(notes_file);

    let id = session
        .create(UpdateFields {
            title: args.title.clone(),
            content: args.content.clone(),
        })
        .context("failed to persist new note")?;

    save_state(notes_file, &session);

    let note = session
        .store()
        .get(&id)
        .context("created note missing from collection")?;
    println!("Created {note}");
    Ok(())
}
