//! File-backed key store under the user config directory

use std::fs;
use std::path::PathBuf;

use super::key_store::PersistentKeyStore;

/// Key store persisting each key as a small file in one directory
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    dir: PathBuf,
}

impl FileKeyStore {
    /// Create a store rooted at an explicit directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create a store under `<config dir>/bonfire/`
    ///
    /// Returns `None` when the platform reports no config directory.
    pub fn in_user_config() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join("bonfire")))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl PersistentKeyStore for FileKeyStore {
    fn get(&self, key: &str) -> Option<String> {
        let value = fs::read_to_string(self.key_path(key)).ok()?;
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create {}: {}", self.dir.display(), e))?;
        let path = self.key_path(key);
        fs::write(&path, value).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SELECTED_THEME_KEY;

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyStore::new(dir.path().to_path_buf());

        store.set(SELECTED_THEME_KEY, "shadowColossus").unwrap();
        assert_eq!(
            store.get(SELECTED_THEME_KEY),
            Some("shadowColossus".to_string())
        );
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyStore::new(dir.path().to_path_buf());
        assert_eq!(store.get(SELECTED_THEME_KEY), None);
    }

    #[test]
    fn set_creates_the_store_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyStore::new(dir.path().join("nested").join("store"));

        store.set(SELECTED_THEME_KEY, "darkSouls").unwrap();
        assert_eq!(store.get(SELECTED_THEME_KEY), Some("darkSouls".to_string()));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyStore::new(dir.path().to_path_buf());

        fs::write(dir.path().join(SELECTED_THEME_KEY), "darkSouls\n").unwrap();
        assert_eq!(store.get(SELECTED_THEME_KEY), Some("darkSouls".to_string()));

        fs::write(dir.path().join(SELECTED_THEME_KEY), "  \n").unwrap();
        assert_eq!(store.get(SELECTED_THEME_KEY), None);
    }
}
