//! Show, open, and edit command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{load_session, resolve_ref, save_state};
use crate::cli::{EditArgs, OpenArgs, ShowArgs};

pub fn handle_show(args: &ShowArgs, notes_file: &Path) -> Result<()> {
    let session = load_session(notes_file);
    let id = resolve_ref(&session, args.note.as_deref())?;
    let note = session
        .store()
        .get(&id)
        .context("resolved note missing from collection")?;

    println!("{}", note.title());
    println!("id:      {}", note.id());
    println!("created: {}", note.created().to_rfc3339());
    println!("updated: {}", note.updated().to_rfc3339());
    if note.pinned() {
        println!("pinned:  yes");
    }
    if !note.tags().is_empty() {
        let tags: Vec<&str> = note.tags().iter().map(|t| t.as_str()).collect();
        println!("tags:    {}", tags.join(", "));
    }
    if !note.content().is_empty() {
        println!();
        println!("{}", note.content());
    }
    Ok(())
}

pub fn handle_open(args: &OpenArgs, notes_file: &Path) -> Result<()> {
    let mut session = load_session(notes_file);
    let id = resolve_ref(&session, Some(&args.note))?;
    session.select(&id);
    save_state(notes_file, &session);

    let note = session
        .selected_note()
        .context("opened note missing from collection")?;
    println!("Opened {note}");
    Ok(())
}

pub fn handle_edit(args: &EditArgs, notes_file: &Path) -> Result<()> {
    if args.title.is_none() && args.content.is_none() {
        bail!("nothing to change; pass --title and/or --content");
    }

    let mut session = load_session(notes_file);
    let id = resolve_ref(&session, args.note.as_deref())?;
    session.select(&id);

    // Stage changes in the edit buffer, then commit once. A commit with
    // unchanged text is a no-op and leaves the updated timestamp alone.
    let Some(draft) = session.draft_mut() else {
        bail!("no note is open");
    };
    if let Some(title) = &args.title {
        draft.set_title(title.clone());
    }
    if let Some(content) = &args.content {
        draft.set_content(content.clone());
    }

    let wrote = session.commit_draft().context("failed to persist edit")?;
    save_state(notes_file, &session);

    let note = session
        .selected_note()
        .context("edited note missing from collection")?;
    if wrote {
        println!("Updated {note}");
    } else {
        println!("No changes to {note}");
    }
    Ok(())
}
