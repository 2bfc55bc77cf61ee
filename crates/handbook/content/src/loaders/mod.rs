//! Content loaders for reading handbook data from files.
//!
//! Files are JSON by default; a `.ron` extension selects RON instead.

pub mod animals;
pub mod factory;
pub mod pelts;

pub use animals::AnimalLoader;
pub use factory::ContentFactory;
pub use pelts::PeltLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses `path` as RON when it has a `.ron` extension, JSON otherwise.
pub(crate) fn parse_file<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let content = read_file(path)?;
    let is_ron = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ron"));

    if is_ron {
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse RON {}: {}", path.display(), e))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON {}: {}", path.display(), e))
    }
}
