//! In-memory KeyValueStore implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use tokio::sync::broadcast;

use crate::repository::{ExternalChange, KeyValueStore, RepositoryError, Result};

/// In-memory implementation of KeyValueStore.
///
/// [`apply_external`](Self::apply_external) stands in for a sync service
/// delivering another device's write: it updates the value and notifies
/// subscribers, while local [`set`](KeyValueStore::set) calls stay silent.
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, Vec<u8>>>,
    changes: broadcast::Sender<ExternalChange>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Create a store whose change channel buffers `capacity` notifications.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            changes: broadcast::channel(capacity.max(1)).0,
        }
    }

    /// Apply a write from another device and notify subscribers.
    ///
    /// `None` removes the key.
    pub fn apply_external(&self, key: &str, value: Option<&[u8]>) -> Result<()> {
        match value {
            Some(bytes) => self.set(key, bytes)?,
            None => self.remove(key)?,
        }

        let change = ExternalChange {
            keys: vec![key.to_string()],
        };
        if self.changes.send(change).is_err() {
            tracing::trace!("No subscribers for external change to {}", key);
        }
        Ok(())
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize> {
        let values = self
            .values
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(values.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let values = self
            .values
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        values.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        values.remove(key);
        Ok(())
    }

    fn subscribe_external(&self) -> Option<broadcast::Receiver<ExternalChange>> {
        Some(self.changes.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        assert!(store.is_empty().unwrap());

        store.set("a", b"one").unwrap();
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.get("a").unwrap().as_deref(), Some(&b"one"[..]));
        assert!(store.contains("a"));

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set("a", b"one").unwrap();

        let poisoner = Arc::clone(&store);
        let result = std::thread::spawn(move || {
            let _guard = poisoner.values.write().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(result.is_err());

        assert!(matches!(store.len(), Err(RepositoryError::LockPoisoned)));
        assert!(matches!(store.is_empty(), Err(RepositoryError::LockPoisoned)));
        assert!(matches!(store.get("a"), Err(RepositoryError::LockPoisoned)));
    }

    #[test]
    fn test_local_writes_do_not_notify() {
        let store = InMemoryKeyValueStore::new();
        let mut rx = store.subscribe_external().unwrap();

        store.set("a", b"local").unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_external_writes_notify() {
        let store = InMemoryKeyValueStore::new();
        let mut rx = store.subscribe_external().unwrap();

        store.apply_external("a", Some(b"remote".as_slice())).unwrap();
        let change = rx.try_recv().unwrap();
        assert!(change.touches("a"));
        assert_eq!(store.get("a").unwrap().as_deref(), Some(&b"remote"[..]));

        store.apply_external("a", None).unwrap();
        assert!(rx.try_recv().unwrap().touches("a"));
        assert_eq!(store.get("a").unwrap(), None);
    }
}
