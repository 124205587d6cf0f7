//! Runtime configuration
//!
//! The dictionary path comes from the command line; logging is configured
//! through the environment so the CLI stays a single positional argument.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::Level;

/// Path of the log file; logging is off when unset
pub const LOG_FILE_VAR: &str = "HANGMAN_LOG";

/// Maximum log level (`error`, `warn`, `info`, `debug`, `trace`)
pub const LOG_LEVEL_VAR: &str = "HANGMAN_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: Level::INFO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary: PathBuf,
    pub log: LogConfig,
}

impl Config {
    /// Build the configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if `HANGMAN_LOG_LEVEL` is set to an unknown level.
    pub fn from_env(dictionary: PathBuf) -> Result<Self> {
        Self::from_vars(dictionary, |name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if the log level variable holds an unknown level.
    pub fn from_vars<F>(dictionary: PathBuf, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = var(LOG_FILE_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let level = match var(LOG_LEVEL_VAR) {
            Some(value) if !value.is_empty() => value
                .parse::<Level>()
                .with_context(|| format!("invalid {LOG_LEVEL_VAR}: {value}"))?,
            _ => Level::INFO,
        };

        Ok(Self {
            dictionary,
            log: LogConfig { file, level },
        })
    }
}
