//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{load_session, save_state};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, OutputFormat};

pub fn handle_list(args: &ListArgs, notes_file: &Path) -> Result<()> {
    let mut session = load_session(notes_file);
    if let Some(query) = &args.query {
        session.set_query(query.clone());
    }

    let open = session.selected().cloned();
    let rows: Vec<NoteListing> = session
        .visible()
        .iter()
        .map(|note| NoteListing::from_note(note, open.as_ref() == Some(note.id())))
        .collect();

    match args.format {
        OutputFormat::Human => {
            if rows.is_empty() {
                println!("No notes.");
            }
            for row in &rows {
                println!("{}", row.human_line());
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&rows).context("failed to serialize listing")?;
            println!("{json}");
        }
    }

    // Reconciliation may have picked an initial selection.
    save_state(notes_file, &session);
    Ok(())
}
