//! Repository layer for mutable user data.
//!
//! Repositories persist data that CHANGES while the app runs:
//! - Collected and tracked item names
//! - The shopping list payload shared with the display surface
//!
//! Static content (animals, pelts, craftable items) is handled by
//! `handbook-content`, not by repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use traits::{ExternalChange, KeyValueStore};
