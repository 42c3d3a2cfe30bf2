//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default notes file
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("config.toml")
    }

    /// Resolve the notes file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--file` argument
    /// 2. Config file `file` setting
    /// 3. `~/.local/share/jot/notes.json` (platform data dir)
    pub fn notes_file(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or_else(|| self.file.clone())
            .unwrap_or_else(Self::default_notes_file)
    }

    fn default_notes_file() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("notes.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_file() {
        let config = Config::default();
        assert!(config.file.is_none());
    }

    #[test]
    fn notes_file_prefers_cli_arg() {
        let config = Config {
            file: Some(PathBuf::from("/config/notes.json")),
        };
        let cli_file = PathBuf::from("/cli/notes.json");
        assert_eq!(
            config.notes_file(Some(&cli_file)),
            PathBuf::from("/cli/notes.json")
        );
    }

    #[test]
    fn notes_file_falls_back_to_config() {
        let config = Config {
            file: Some(PathBuf::from("/config/notes.json")),
        };
        assert_eq!(
            config.notes_file(None),
            PathBuf::from("/config/notes.json")
        );
    }

    #[test]
    fn notes_file_falls_back_to_data_dir() {
        let config = Config::default();
        let path = config.notes_file(None);
        assert!(path.ends_with("jot/notes.json"));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("jot/config.toml"));
    }

    #[test]
    fn parses_file_setting() {
        let config: Config = toml::from_str("file = \"/tmp/notes.json\"").unwrap();
        assert_eq!(config.file, Some(PathBuf::from("/tmp/notes.json")));
    }
}
