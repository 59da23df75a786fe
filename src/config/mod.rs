//! Configuration management module
//!
//! Handles loading, saving, and validation of the menu configuration:
//! where the token lives, what to launch on Begin, and logging.

use crate::{MenuError, Result, APP_NAME, CONFIG_FILE, TOKEN_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod persistence;

pub use persistence::{CredentialStore, FileCredentialStore, MemoryCredentialStore};

const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 5000;

/// Menu configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// File holding the Lichess token
    pub token_file: PathBuf,
    /// Master program to launch on Begin; selections go to stdout when unset
    pub master_program: Option<PathBuf>,
    /// Extra arguments for the master program
    pub master_program_args: Vec<String>,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Logging settings
    pub log: LogConfig,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory the log file is written to
    pub directory: PathBuf,
    /// `tracing` filter directive, overridden by RUST_LOG
    pub filter: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            token_file: default_app_dir(dirs::config_dir()).join(TOKEN_FILE),
            master_program: None,
            master_program_args: Vec::new(),
            tick_rate_ms: 250,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: default_app_dir(dirs::data_dir()).join("logs"),
            filter: "info".to_string(),
        }
    }
}

fn default_app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join(APP_NAME)
}

impl MenuConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token_file(mut self, path: PathBuf) -> Self {
        self.token_file = path;
        self
    }

    pub fn with_master_program(mut self, path: PathBuf) -> Self {
        self.master_program = Some(path);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log.filter = filter.into();
        self
    }

    /// Replace file values with whichever overrides are given, then validate
    pub fn with_overrides(
        mut self,
        token_file: Option<PathBuf>,
        master_program: Option<PathBuf>,
        log_filter: Option<String>,
    ) -> Result<Self> {
        if let Some(path) = token_file {
            self = self.with_token_file(path);
        }
        if let Some(path) = master_program {
            self = self.with_master_program(path);
        }
        if let Some(filter) = log_filter {
            self = self.with_log_filter(filter);
        }
        self.validate()?;
        Ok(self)
    }

    /// Poll interval for the event loop
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.token_file.as_os_str().is_empty() {
            return Err(MenuError::Config("Token file path must not be empty".to_string()));
        }

        if self.token_file.is_dir() {
            return Err(MenuError::Config(format!(
                "Token file path is a directory: {}",
                self.token_file.display()
            )));
        }

        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.tick_rate_ms) {
            return Err(MenuError::Config(format!(
                "Tick rate must be between {} and {} ms, got {}",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, self.tick_rate_ms
            )));
        }

        if let Some(program) = &self.master_program {
            if program.as_os_str().is_empty() {
                return Err(MenuError::Config(
                    "Master program path must not be empty".to_string(),
                ));
            }
        }

        if self.log.filter.trim().is_empty() {
            return Err(MenuError::Config("Log filter must not be empty".to_string()));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            MenuError::Config(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            MenuError::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MenuError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            MenuError::Config(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/chess-menu/chess-menu.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            MenuError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Credential store backed by the configured token file
    pub fn credential_store(&self) -> FileCredentialStore {
        FileCredentialStore::new(&self.token_file)
    }
}
