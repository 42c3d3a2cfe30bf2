//! jot - pinned, tagged notes in a single JSON file

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_edit, handle_list, handle_new, handle_open, handle_pin,
        handle_rm, handle_show, handle_tag, handle_untag,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let notes_file = config.notes_file(cli.file.as_ref());

    match &cli.command {
        Command::New(args) => handle_new(args, &notes_file),
        Command::List(args) => handle_list(args, &notes_file),
        Command::Show(args) => handle_show(args, &notes_file),
        Command::Open(args) => handle_open(args, &notes_file),
        Command::Edit(args) => handle_edit(args, &notes_file),
        Command::Pin(args) => handle_pin(args, &notes_file),
        Command::Tag(args) => handle_tag(args, &notes_file),
        Command::Untag(args) => handle_untag(args, &notes_file),
        Command::Rm(args) => handle_rm(args, &notes_file),
        Command::Completions(args) => handle_completions(args),
    }
}
