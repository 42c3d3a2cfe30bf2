//! Remove command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{load_session, resolve_ref, save_state};
use crate::cli::RmArgs;
use crate::cli::confirm::TtyConfirm;
use crate::store::{AlwaysConfirm, Confirm};

pub fn handle_rm(args: &RmArgs, notes_file: &Path) -> Result<()> {
    let mut session = load_session(notes_file);
    let id = resolve_ref(&session, args.note.as_deref())?;
    let title = session
        .store()
        .get(&id)
        .context("resolved note missing from collection")?
        .title()
        .to_string();

    let confirm: &dyn Confirm = if args.force {
        &AlwaysConfirm
    } else {
        &TtyConfirm
    };

    let removed = session
        .remove(&id, confirm)
        .context("failed to persist deletion")?;
    save_state(notes_file, &session);

    if removed {
        println!("Deleted '{title}'");
        if let Some(next) = session.selected_note() {
            println!("Now open: {next}");
        }
    } else {
        println!("Kept '{title}'");
    }
    Ok(())
}
