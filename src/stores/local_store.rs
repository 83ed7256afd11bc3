use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::stores::traits::{KeyValueStore, StoreError};

/// A native stand-in for `localStorage`, keeping each key as its own file inside a data
/// directory. Values survive process restarts the same way browser storage survives reloads.
#[derive(Clone, Debug)]
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;

        Ok(Self { data_dir })
    }

    /// Opens the store in the platform specific data directory for this application (for example
    /// `~/.local/share/bilo-session` on Linux).
    pub fn default_location() -> Result<Self, StoreError> {
        let proj_dirs = ProjectDirs::from("app", "Bilo", "bilo-session")
            .ok_or(StoreError::StorageUnavailable)?;

        Self::new(proj_dirs.data_dir())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn key_to_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        Ok(self.data_dir.join(key))
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_to_path(key)?;

        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                tracing::debug!("failed to read {}: {err}", path.display());
                Err(err.into())
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_to_path(key)?;
        std::fs::write(&path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{get_session_id, SESSION_STORAGE_KEY};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "bilo-session-{name}-{}",
            crate::session::SessionId::random()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = scratch_dir("missing");

        let store = LocalStore::new(&dir).unwrap();
        assert!(store.get_item("bilo_session_id").unwrap().is_none());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = scratch_dir("reopen");

        let mut store = LocalStore::new(&dir).unwrap();
        store.set_item("bilo_session_id", "abc").unwrap();

        let reopened = LocalStore::new(&dir).unwrap();
        assert_eq!(
            reopened.get_item("bilo_session_id").unwrap().as_deref(),
            Some("abc")
        );

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_path_like_keys_rejected() {
        let dir = scratch_dir("keys");
        let mut store = LocalStore::new(&dir).unwrap();

        for key in ["", "../escape", ".hidden", "a/b", "sp ace"] {
            assert!(
                matches!(store.set_item(key, "x"), Err(StoreError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_os_errors_reach_the_caller() {
        let dir = scratch_dir("os-error");
        let mut store = LocalStore::new(&dir).unwrap();

        // A directory where the value file should be makes both reads and writes fail
        std::fs::create_dir(dir.join(SESSION_STORAGE_KEY)).unwrap();

        let read_err = store.get_item(SESSION_STORAGE_KEY).unwrap_err();
        let StoreError::Io(io_err) = read_err else {
            panic!("expected the I/O error, got {read_err:?}");
        };
        assert_ne!(io_err.kind(), ErrorKind::NotFound);
        assert!(io_err.raw_os_error().is_some());

        let session_err = get_session_id(&mut store).unwrap_err();
        assert!(matches!(session_err, StoreError::Io(ref err) if err.raw_os_error().is_some()));

        let write_err = store.set_item(SESSION_STORAGE_KEY, "value").unwrap_err();
        assert!(matches!(write_err, StoreError::Io(_)));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_unwritable_location_reports_os_error() {
        let dir = scratch_dir("file-in-the-way");
        std::fs::write(&dir, "not a directory").unwrap();

        let err = LocalStore::new(dir.join("nested")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));

        std::fs::remove_file(dir).unwrap();
    }
}
