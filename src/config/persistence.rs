//! Credential persistence module
//!
//! Loads and saves the Lichess token. The file holds exactly the token
//! string, written and read back verbatim.

use crate::{MenuError, Result};
use std::cell::{Cell, RefCell};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Durable home of the access token
pub trait CredentialStore {
    /// Read the stored token, empty if nothing has been saved yet
    fn load(&self) -> Result<String>;
    /// Overwrite the stored token
    fn save(&self, token: &str) -> Result<()>;
}

/// Token kept in a single plain text file
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    token_path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(token_path: impl Into<PathBuf>) -> Self {
        Self {
            token_path: token_path.into(),
        }
    }

    /// Get token file path for external access
    pub fn path(&self) -> &Path {
        &self.token_path
    }

    fn credential_error(&self, source: std::io::Error) -> MenuError {
        MenuError::Credential {
            path: self.token_path.clone(),
            source,
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.token_path) {
            Ok(token) => Ok(token),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(self.credential_error(e)),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.token_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.credential_error(e))?;
            }
        }

        fs::write(&self.token_path, token).map_err(|e| self.credential_error(e))
    }
}

/// Token held in memory only
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RefCell<String>,
    fail_loads: Cell<bool>,
    fail_saves: Cell<bool>,
}

impl MemoryCredentialStore {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(token.into()),
            ..Self::default()
        }
    }

    /// Make subsequent loads fail with a permission error
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.set(fail);
    }

    /// Make subsequent saves fail with a permission error
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    fn denied() -> MenuError {
        MenuError::Credential {
            path: PathBuf::from("<memory>"),
            source: std::io::Error::new(ErrorKind::PermissionDenied, "store is read-only"),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<String> {
        if self.fail_loads.get() {
            return Err(Self::denied());
        }
        Ok(self.token.borrow().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        if self.fail_saves.get() {
            return Err(Self::denied());
        }
        *self.token.borrow_mut() = token.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("token.txt"));
        assert_eq!(store.load().unwrap(), "");
    }

    #[test]
    fn test_save_and_load_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("token.txt"));

        let token = "  lip_abc123\n";
        store.save(token).unwrap();
        assert_eq!(store.load().unwrap(), token);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), token);
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("token.txt"));

        store.save("a much longer first token").unwrap();
        store.save("short").unwrap();
        assert_eq!(store.load().unwrap(), "short");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("token.txt");
        let store = FileCredentialStore::new(&path);

        store.save("TOKEN42").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_directory_is_credential_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path());
        assert!(matches!(store.load(), Err(MenuError::Credential { .. })));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryCredentialStore::new("one");
        store.save("two").unwrap();
        assert_eq!(store.load().unwrap(), "two");

        store.fail_saves(true);
        assert!(store.save("three").is_err());
        assert_eq!(store.load().unwrap(), "two");
    }
}
