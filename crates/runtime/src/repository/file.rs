//! File-based KeyValueStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{KeyValueStore, RepositoryError, Result};

/// File-based implementation of KeyValueStore.
///
/// # File Format
///
/// Each key is stored as `{key}.dat` under the base directory and holds the
/// raw value bytes. Writes go to a temporary file first and are renamed
/// into place, so readers never observe a partial value.
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file-based store, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a value file.
    fn value_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_dir.join(format!("{}.dat", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.value_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        tracing::debug!("Loaded {} ({} bytes) from {}", key, bytes.len(), path.display());

        Ok(Some(bytes))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.value_path(key)?;
        let temp_path = path.with_extension("dat.tmp");

        fs::write(&temp_path, value)?;

        // Atomic rename
        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::debug!("Saved {} ({} bytes) to {}", key, value.len(), path.display());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key)?;

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Removed {}", key);
        }

        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path()).unwrap();

        store.set("collected_items_v3", br#"["Bear Hat"]"#).unwrap();
        assert_eq!(
            store.get("collected_items_v3").unwrap().as_deref(),
            Some(&br#"["Bear Hat"]"#[..])
        );
        assert!(temp_dir.path().join("collected_items_v3.dat").exists());
        assert!(!temp_dir.path().join("collected_items_v3.dat.tmp").exists());
    }

    #[test]
    fn test_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path()).unwrap();

        assert_eq!(store.get("absent").unwrap(), None);
        assert!(!store.contains("absent"));
        store.remove("absent").unwrap();
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();

        {
            let store = FileKeyValueStore::new(temp_dir.path()).unwrap();
            store.set("tracked_items_v1", b"[]").unwrap();
        }

        let store = FileKeyValueStore::new(temp_dir.path()).unwrap();
        assert!(store.contains("tracked_items_v1"));

        store.remove("tracked_items_v1").unwrap();
        assert!(!store.contains("tracked_items_v1"));
    }

    #[test]
    fn test_creates_nested_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = FileKeyValueStore::new(&nested).unwrap();
        assert_eq!(store.base_dir(), nested.as_path());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path()).unwrap();

        // A non-empty directory in the value's place makes the rename fail.
        let blocker = temp_dir.path().join("collected_items_v3.dat");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), b"x").unwrap();

        assert!(matches!(
            store.set("collected_items_v3", b"[]"),
            Err(RepositoryError::Io(_))
        ));
        assert!(!temp_dir.path().join("collected_items_v3.dat.tmp").exists());
        assert!(blocker.is_dir());
    }

    #[test]
    fn test_rejects_unsafe_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path()).unwrap();

        for key in ["", "../escape", "a/b", ".hidden", "white space"] {
            assert!(
                matches!(store.set(key, b"x"), Err(RepositoryError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }
}
