//! Pelt list loader.

use std::path::Path;

use crate::loaders::{LoadResult, parse_file};
use crate::model::Pelt;

/// Loader for pelts and their craftable recipes.
pub struct PeltLoader;

impl PeltLoader {
    /// Load pelts from a JSON array (or RON sequence) file.
    ///
    /// Prices are decimal dollar amounts; a negative price fails the load.
    pub fn load(path: &Path) -> LoadResult<Vec<Pelt>> {
        parse_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handbook_core::Money;
    use tempfile::TempDir;

    const PELTS_JSON: &str = r#"[{
        "id": "p1",
        "name": "Perfect Bear Pelt",
        "description": "",
        "trapperItems": [
            {"id": "t1", "name": "Bear Hat", "price": 25.5, "ingredients": ["x2 Perfect Bear Pelt"]}
        ],
        "fenceItems": [
            {"id": "f1", "name": "Bear Talisman", "price": 75, "ingredients": ["Bear Claw"], "effect": "Slower core drain"}
        ],
        "campItems": [
            {"id": "c1", "name": "Bear Rug", "ingredients": ["Legendary Bear Pelt"]}
        ]
    }]"#;

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pelts.json");
        std::fs::write(&path, PELTS_JSON).unwrap();

        let pelts = PeltLoader::load(&path).unwrap();
        assert_eq!(pelts.len(), 1);

        let pelt = &pelts[0];
        assert_eq!(pelt.trapper_items[0].price, Money::from_cents(2550));
        assert_eq!(pelt.fence_items[0].effect, "Slower core drain");
        assert_eq!(pelt.camp_items[0].ingredients, ["Legendary Bear Pelt"]);
    }

    #[test]
    fn test_load_ron() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pelts.ron");
        std::fs::write(
            &path,
            r#"[(
                id: "p1",
                name: "Cougar Pelt",
                trapperItems: [(id: "t1", name: "Cougar Hat", price: 12.0, ingredients: ["x1 Perfect Cougar Pelt"])],
            )]"#,
        )
        .unwrap();

        let pelts = PeltLoader::load(&path).unwrap();
        assert_eq!(pelts[0].name, "Cougar Pelt");
        assert_eq!(pelts[0].trapper_items[0].price, Money::from_cents(1200));
        assert!(pelts[0].fence_items.is_empty());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pelts.json");
        std::fs::write(
            &path,
            r#"[{"id": "p", "name": "Bad", "trapperItems": [{"id": "t", "name": "Hat", "price": -1}]}]"#,
        )
        .unwrap();

        let err = PeltLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
