//! In-memory catalog built from loaded animals and pelts.

use std::collections::HashSet;

use handbook_core::{CraftableItem, ItemId, ItemKind};

use crate::model::{Animal, Pelt};

/// Immutable view over all static content.
///
/// Craftable items are flattened out of every pelt, deduplicated by name
/// (the first occurrence wins) and sorted by name. Entries with an empty
/// name are skipped.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    animals: Vec<Animal>,
    pelts: Vec<Pelt>,
    items: Vec<CraftableItem>,
}

impl Catalog {
    pub fn new(animals: Vec<Animal>, pelts: Vec<Pelt>) -> Self {
        let items = craftable_items(&pelts);
        Self {
            animals,
            pelts,
            items,
        }
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn pelts(&self) -> &[Pelt] {
        &self.pelts
    }

    pub fn items(&self) -> &[CraftableItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CraftableItem> {
        self.items
    }

    pub fn animal(&self, name: &str) -> Option<&Animal> {
        self.animals.iter().find(|animal| animal.name == name)
    }

    pub fn pelt(&self, name: &str) -> Option<&Pelt> {
        self.pelts.iter().find(|pelt| pelt.name == name)
    }

    pub fn item(&self, name: &str) -> Option<&CraftableItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Case-insensitive substring search across animals, pelts and items,
    /// in that order. An empty filter matches everything.
    pub fn search(&self, filter: &str) -> Vec<SearchEntry<'_>> {
        let needle = filter.to_lowercase();
        let matches = |name: &str| needle.is_empty() || name.to_lowercase().contains(&needle);

        let animals = self
            .animals
            .iter()
            .filter(|animal| matches(&animal.name))
            .map(SearchEntry::Animal);
        let pelts = self
            .pelts
            .iter()
            .filter(|pelt| matches(&pelt.name))
            .map(SearchEntry::Pelt);
        let items = self
            .items
            .iter()
            .filter(|item| matches(&item.name))
            .map(SearchEntry::Item);

        animals.chain(pelts).chain(items).collect()
    }
}

/// A single row of the unified search list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchEntry<'a> {
    Animal(&'a Animal),
    Pelt(&'a Pelt),
    Item(&'a CraftableItem),
}

impl<'a> SearchEntry<'a> {
    pub fn id(&self) -> &'a ItemId {
        match self {
            SearchEntry::Animal(animal) => &animal.id,
            SearchEntry::Pelt(pelt) => &pelt.id,
            SearchEntry::Item(item) => &item.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            SearchEntry::Animal(animal) => &animal.name,
            SearchEntry::Pelt(pelt) => &pelt.name,
            SearchEntry::Item(item) => &item.name,
        }
    }
}

fn craftable_items(pelts: &[Pelt]) -> Vec<CraftableItem> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut items = Vec::new();

    for pelt in pelts {
        for item in &pelt.trapper_items {
            if !item.name.is_empty() && seen.insert(&item.name) {
                items.push(
                    CraftableItem::new(item.id.clone(), &item.name, ItemKind::Trapper)
                        .with_price(item.price)
                        .with_ingredients(item.ingredients.iter().cloned())
                        .with_source_pelt(&pelt.name),
                );
            }
        }

        for item in &pelt.fence_items {
            if !item.name.is_empty() && seen.insert(&item.name) {
                let mut craftable =
                    CraftableItem::new(item.id.clone(), &item.name, ItemKind::Fence)
                        .with_price(item.price)
                        .with_ingredients(item.ingredients.iter().cloned())
                        .with_source_pelt(&pelt.name);
                if !item.effect.is_empty() {
                    craftable = craftable.with_effect(&item.effect);
                }
                items.push(craftable);
            }
        }

        for item in &pelt.camp_items {
            if !item.name.is_empty() && seen.insert(&item.name) {
                items.push(
                    CraftableItem::new(item.id.clone(), &item.name, ItemKind::Camp)
                        .with_ingredients(item.ingredients.iter().cloned())
                        .with_source_pelt(&pelt.name),
                );
            }
        }
    }

    items.sort_by(|a, b| a.name.cmp(&b.name));
    items
}
