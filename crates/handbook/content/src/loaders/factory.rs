//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::loaders::{AnimalLoader, LoadResult, PeltLoader};
use crate::model::{Animal, Pelt};

/// Content factory that loads all handbook content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── animals.json   (or animals.ron)
/// └── pelts.json     (or pelts.ron)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the animal list from `animals.json` or `animals.ron`.
    pub fn load_animals(&self) -> LoadResult<Vec<Animal>> {
        AnimalLoader::load(&self.resolve("animals"))
    }

    /// Load the pelt list from `pelts.json` or `pelts.ron`.
    pub fn load_pelts(&self) -> LoadResult<Vec<Pelt>> {
        PeltLoader::load(&self.resolve("pelts"))
    }

    /// Load everything and derive the craftable item catalog.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let animals = self.load_animals()?;
        let pelts = self.load_pelts()?;
        Ok(Catalog::new(animals, pelts))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// JSON wins when both formats are present.
    fn resolve(&self, stem: &str) -> PathBuf {
        let json = self.data_dir.join(format!("{stem}.json"));
        if json.exists() {
            return json;
        }
        let ron = self.data_dir.join(format!("{stem}.ron"));
        if ron.exists() { ron } else { json }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn test_load_catalog_mixed_formats() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("animals.json"),
            r#"[{"id": "a1", "name": "Cougar"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("pelts.ron"),
            r#"[(id: "p1", name: "Cougar Pelt", campItems: [(id: "c1", name: "Cougar Rug", ingredients: ["Legendary Cougar Pelt"])])]"#,
        )
        .unwrap();

        let catalog = ContentFactory::new(dir.path()).load_catalog().unwrap();
        assert_eq!(catalog.animals().len(), 1);
        assert_eq!(catalog.items().len(), 1);
        assert_eq!(catalog.items()[0].source_pelt, "Cougar Pelt");
    }

    #[test]
    fn test_bundled_sample_data_loads() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let catalog = ContentFactory::new(data_dir).load_catalog().unwrap();

        assert!(!catalog.animals().is_empty());
        assert!(!catalog.items().is_empty());
        assert!(catalog.items().windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(ContentFactory::new(dir.path().join("missing")).load_catalog().is_err());
    }
}
