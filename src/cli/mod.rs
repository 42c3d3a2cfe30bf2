//! CLI command definitions and handlers

pub mod config;
pub mod confirm;
pub mod handlers;
pub mod output;
pub mod state;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jot - pinned, tagged notes in a single JSON file
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Notes file (overrides config file)
    #[arg(short = 'f', long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note and open it
    New(NewArgs),

    /// List notes, optionally filtered by a search query
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// Open a note (make it the selection for later commands)
    Open(OpenArgs),

    /// Edit the open note's title or content
    Edit(EditArgs),

    /// Toggle a note's pinned state
    Pin(PinArgs),

    /// Add a tag to a note
    Tag(TagArgs),

    /// Remove a tag from a note
    Untag(UntagArgs),

    /// Delete a note (asks for confirmation)
    Rm(RmArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Title for the note (defaults to "Untitled Note")
    pub title: Option<String>,

    /// Initial content
    #[arg(short, long)]
    pub content: Option<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Search query matched against titles, content, and tags
    pub query: Option<String>,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note id or unambiguous prefix (defaults to the open note)
    pub note: Option<String>,
}

/// Arguments for the `open` command
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Note id or unambiguous prefix
    pub note: String,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note id or unambiguous prefix (defaults to the open note)
    pub note: Option<String>,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New content
    #[arg(short, long)]
    pub content: Option<String>,
}

/// Arguments for the `pin` command
#[derive(Parser, Debug)]
pub struct PinArgs {
    /// Note id or unambiguous prefix (defaults to the open note)
    pub note: Option<String>,
}

/// Arguments for the `tag` command
#[derive(Parser, Debug)]
pub struct TagArgs {
    /// Note id or unambiguous prefix
    pub note: String,

    /// Tag to add
    pub tag: String,
}

/// Arguments for the `untag` command
#[derive(Parser, Debug)]
pub struct UntagArgs {
    /// Note id or unambiguous prefix
    pub note: String,

    /// Tag to remove
    pub tag: String,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note id or unambiguous prefix (defaults to the open note)
    pub note: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
