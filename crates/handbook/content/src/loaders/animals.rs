//! Animal list loader.

use std::path::Path;

use crate::loaders::{LoadResult, parse_file};
use crate::model::Animal;

/// Loader for the animal list.
pub struct AnimalLoader;

impl AnimalLoader {
    /// Load animals from a JSON array (or RON sequence) file.
    pub fn load(path: &Path) -> LoadResult<Vec<Animal>> {
        parse_file(path)
    }
}
