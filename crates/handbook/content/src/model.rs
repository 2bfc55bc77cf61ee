//! Static content records as they appear in the data files.

use handbook_core::{ItemId, Money};

/// An animal entry from `animals.json`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Animal {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tips: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub trivia: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub danger: String,
}

impl Animal {
    pub fn image_name(&self) -> String {
        image_name(&self.name)
    }

    pub fn thumbnail_name(&self) -> String {
        thumbnail_name(&self.name)
    }
}

/// A pelt entry from `pelts.json` with everything that can be crafted from it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Pelt {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub trapper_items: Vec<TrapperItem>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fence_items: Vec<FenceItem>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub camp_items: Vec<CampItem>,
}

impl Pelt {
    pub fn image_name(&self) -> String {
        image_name(&self.name)
    }

    pub fn thumbnail_name(&self) -> String {
        thumbnail_name(&self.name)
    }
}

/// Clothing sold by the trapper.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapperItem {
    pub id: ItemId,
    pub name: String,
    pub price: Money,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ingredients: Vec<String>,
}

/// Talismans and trinkets crafted by the fence.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FenceItem {
    pub id: ItemId,
    pub name: String,
    pub price: Money,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ingredients: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: String,
}

/// Camp decorations; free to craft.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampItem {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ingredients: Vec<String>,
}

/// Asset name derived from a display name: `"Perfect Bear"` → `"perfect-bear"`.
pub fn image_name(name: &str) -> String {
    name.replace(' ', "-").to_lowercase()
}

pub fn thumbnail_name(name: &str) -> String {
    format!("{}-thumb", image_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_names() {
        let animal = Animal {
            name: "American Bison".to_string(),
            ..Animal::default()
        };
        assert_eq!(animal.image_name(), "american-bison");
        assert_eq!(animal.thumbnail_name(), "american-bison-thumb");
    }
}
