//! Craftable item definitions.

use strum::{Display, EnumString};

use crate::money::Money;

/// Opaque identifier carried over from the content files.
///
/// Identifiers are stable per entry but are NOT the key for collection
/// state: the same named item can appear under several pelts.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a craftable item is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Trapper,
    Fence,
    Camp,
}

/// One recipe the player can craft.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftableItem {
    pub id: ItemId,
    /// Unique key for collected/tracked lookups.
    pub name: String,
    pub kind: ItemKind,
    /// Camp items are free to craft and carry no price.
    pub price: Option<Money>,
    /// Raw ingredient strings such as `"x2 Perfect Bear Pelt"`.
    pub ingredients: Vec<String>,
    pub effect: Option<String>,
    /// Pelt the item was first listed under.
    pub source_pelt: String,
}

impl CraftableItem {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            price: None,
            ingredients: Vec::new(),
            effect: None,
            source_pelt: String::new(),
        }
    }

    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    pub fn with_source_pelt(mut self, pelt: impl Into<String>) -> Self {
        self.source_pelt = pelt.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_display_and_parse() {
        assert_eq!(ItemKind::Trapper.to_string(), "Trapper");
        assert_eq!(ItemKind::from_str("Camp").unwrap(), ItemKind::Camp);
        assert!(ItemKind::from_str("Vendor").is_err());
    }

    #[test]
    fn test_builder() {
        let item = CraftableItem::new(ItemId::new("a1"), "Bear Hat", ItemKind::Trapper)
            .with_price(Money::from_cents(4000))
            .with_ingredients(["x2 Perfect Bear Pelt"])
            .with_source_pelt("Bear Pelt");

        assert_eq!(item.price, Some(Money::from_cents(4000)));
        assert_eq!(item.ingredients, vec!["x2 Perfect Bear Pelt".to_string()]);
        assert_eq!(item.source_pelt, "Bear Pelt");
        assert!(item.effect.is_none());
    }
}
