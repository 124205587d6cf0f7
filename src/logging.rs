//! Log output
//!
//! The TUI owns the terminal, so logs only ever go to a file.

use crate::config::LogConfig;
use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::sync::Mutex;

/// Install the global subscriber if a log file is configured
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.level)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_is_a_no_op() {
        assert!(init(&LogConfig::default()).is_ok());
    }

    #[test]
    fn unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            file: Some(dir.path().join("missing").join("hangman.log")),
            ..LogConfig::default()
        };
        assert!(init(&config).is_err());
    }
}
