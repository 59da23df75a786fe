//! chess-menu - terminal menu front-end for the chess master program
//!
//! Walks the user through game mode, opponent, engine and side selection,
//! keeps the Lichess token on disk, and hands the finished selection to the
//! master program.

use std::path::PathBuf;
use thiserror::Error;

pub mod app;
pub mod config;
pub mod logging;
pub mod menu;
pub mod runner;

// Common error types
#[derive(Debug, Error)]
pub enum MenuError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Credential file could not be read or written
    #[error("Credential store error at {}: {source}", .path.display())]
    Credential {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    Tui(String),
    /// Handing the selection to the master program failed
    #[error("Hand-off error: {0}")]
    Handoff(String),
    /// Begin was requested before the selection was complete
    #[error("Selection incomplete: {0}")]
    IncompleteSelection(&'static str),
}

impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::Handoff(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for MenuError {
    fn from(err: toml::de::Error) -> Self {
        MenuError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for MenuError {
    fn from(err: toml::ser::Error) -> Self {
        MenuError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for chess-menu operations
pub type Result<T> = std::result::Result<T, MenuError>;

/// Error handling utilities
pub mod error {
    use super::MenuError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &MenuError) -> String {
        match error {
            MenuError::Credential { path, .. } => format!(
                "Could not access the token file {}. Check that the directory is writable.",
                path.display()
            ),
            MenuError::Config(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            MenuError::Tui(_) => {
                "Terminal could not be driven. Run from an interactive terminal.".to_string()
            }
            MenuError::Handoff(_) => {
                "The master program could not be started. Check `master_program` in the config."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }

    /// Whether the error should abort the menu or can be shown on screen
    pub fn is_recoverable(error: &MenuError) -> bool {
        matches!(error, MenuError::Credential { .. } | MenuError::Io(_))
    }
}

// Common types and constants
pub const APP_NAME: &str = "chess-menu";
pub const CONFIG_FILE: &str = "chess-menu.toml";
pub const TOKEN_FILE: &str = "lichessToken.txt";
pub const LOG_FILE: &str = "chess-menu.log";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_error_mentions_path() {
        let err = MenuError::Credential {
            path: PathBuf::from("/tmp/token.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/token.txt"));
        assert!(error::user_friendly_message(&err).contains("token file"));
        assert!(error::is_recoverable(&err));
    }

    #[test]
    fn test_config_error_not_recoverable() {
        let err = MenuError::Config("bad tick rate".into());
        assert!(!error::is_recoverable(&err));
        assert!(error::user_friendly_message(&err).contains("bad tick rate"));
    }
}
