//! Key-value store contract shared by the checklist and the display surface.

use tokio::sync::broadcast;

use super::Result;

/// Notification that another writer changed the store.
///
/// Delivered on a background channel; consumers must re-read the affected
/// keys on their own task rather than touching shared state from the sender.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExternalChange {
    pub keys: Vec<String>,
}

impl ExternalChange {
    pub fn touches(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}

/// Byte-oriented key-value persistence.
///
/// Implementations are cheap to share behind an `Arc` and never interpret
/// the stored bytes.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Check if a value exists under `key`.
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }

    /// Push pending writes to the backing medium.
    fn synchronize(&self) -> Result<()> {
        Ok(())
    }

    /// Subscribe to changes made by other writers.
    ///
    /// Stores that cannot observe outside writers return `None`.
    fn subscribe_external(&self) -> Option<broadcast::Receiver<ExternalChange>> {
        None
    }
}
