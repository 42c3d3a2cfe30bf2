//! Interactive confirmation prompt for destructive commands.

use crate::store::Confirm;
use std::io::{self, BufRead, Write};

/// Prompts on stdout and reads a y/N answer from stdin.
///
/// Anything other than an explicit yes declines, including a closed
/// stdin, so scripted use without `--force` is safe by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct TtyConfirm;

impl Confirm for TtyConfirm {
    fn confirm_destructive(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
