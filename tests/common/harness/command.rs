//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `jot` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct JotCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl JotCommand {
    /// Creates a new command for the `jot` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--file` option to specify the notes file.
    pub fn file(mut self, path: &Path) -> Self {
        self.args.push("--file".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Pipes the given input to the command's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
        cmd.args(&self.args);
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `new` command.
    pub fn new_note(self, title: &str) -> Self {
        self.args(["new", title])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `ls` command with a query.
    pub fn ls_query(self, query: &str) -> Self {
        self.args(["ls", query])
    }

    /// Configures for the `show` command.
    pub fn show(self, reference: &str) -> Self {
        self.args(["show", reference])
    }

    /// Configures for the `open` command.
    pub fn open(self, reference: &str) -> Self {
        self.args(["open", reference])
    }

    /// Configures for the `pin` command.
    pub fn pin(self, reference: &str) -> Self {
        self.args(["pin", reference])
    }

    /// Configures for the `tag` command.
    pub fn tag(self, reference: &str, tag: &str) -> Self {
        self.args(["tag", reference, tag])
    }

    /// Configures for the `untag` command.
    pub fn untag(self, reference: &str, tag: &str) -> Self {
        self.args(["untag", reference, tag])
    }

    /// Configures for the `rm` command.
    pub fn rm(self, reference: &str) -> Self {
        self.args(["rm", reference])
    }

    /// Adds the `--force` flag.
    pub fn with_force(self) -> Self {
        self.args(["--force"])
    }

    /// Adds the `--format json` option.
    pub fn json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for JotCommand {
    fn default() -> Self {
        Self::new()
    }
}
