use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::session::application::ports::outgoing::token_store::{TokenStore, TokenStoreError};

/// Token persistence backed by a single file, the desktop counterpart of
/// the browser's storage key.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();

        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        fs::write(&self.path, token).map_err(|err| TokenStoreError::Storage(err.to_string()))
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            // Already logged out: nothing to remove
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(TokenStoreError::Storage(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join(".portfolio_token"))
    }

    #[test]
    fn token_round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("jwt-token").unwrap();

        assert_eq!(store.load(), Some("jwt-token".to_string()));
    }

    #[test]
    fn missing_file_means_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load(), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join(".portfolio_token"), "  jwt-token\n").unwrap();

        assert_eq!(store.load(), Some("jwt-token".to_string()));
    }

    #[test]
    fn clear_removes_the_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("jwt-token").unwrap();

        store.clear().unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_without_a_token_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.clear().is_ok());
    }
}
