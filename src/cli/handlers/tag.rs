//! Pin, tag, and untag command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{load_session, resolve_ref, save_state};
use crate::cli::{PinArgs, TagArgs, UntagArgs};

pub fn handle_pin(args: &PinArgs, notes_file: &Path) -> Result<()> {
    let mut session = load_session(notes_file);
    let id = resolve_ref(&session, args.note.as_deref())?;

    session
        .toggle_pin(&id)
        .context("failed to persist pin change")?;
    save_state(notes_file, &session);

    let note = session
        .store()
        .get(&id)
        .context("pinned note missing from collection")?;
    if note.pinned() {
        println!("Pinned {note}");
    } else {
        println!("Unpinned {note}");
    }
    Ok(())
}

pub fn handle_tag(args: &TagArgs, notes_file: &Path) -> Result<()> {
    let mut session = load_session(notes_file);
    let id = resolve_ref(&session, Some(&args.note))?;

    let added = session
        .add_tag(&id, &args.tag)
        .context("failed to persist tag")?;
    if !added {
        bail!("tag cannot be empty");
    }
    save_state(notes_file, &session);

    let note = session
        .store()
        .get(&id)
        .context("tagged note missing from collection")?;
    println!("Tagged {} with '{}'", note, args.tag.trim());
    Ok(())
}

pub fn handle_untag(args: &UntagArgs, notes_file: &Path) -> Result<()> {
    let mut session = load_session(notes_file);
    let id = resolve_ref(&session, Some(&args.note))?;

    let removed = session
        .remove_tag(&id, &args.tag)
        .context("failed to persist tag removal")?;
    save_state(notes_file, &session);

    let note = session
        .store()
        .get(&id)
        .context("untagged note missing from collection")?;
    if removed {
        println!("Removed '{}' from {}", args.tag.trim(), note);
    } else {
        println!("{} does not have tag '{}'", note, args.tag.trim());
    }
    Ok(())
}
