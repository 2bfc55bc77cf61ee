//! Collected/tracked state machine.
//!
//! Every item name is independently in one of three states: none, tracked
//! (wanted for the shopping list) or collected. Collecting a tracked item
//! drops it from the tracked set; tracking never touches the collected set.

use std::collections::BTreeSet;

use crate::item::CraftableItem;
use crate::shopping::ShoppingList;

/// Derived per-name view of [`CollectionState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemStatus {
    #[default]
    None,
    Tracked,
    Collected,
}

/// The collected and tracked name sets.
///
/// Sets are ordered so that serialized output is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionState {
    pub collected: BTreeSet<String>,
    pub tracked: BTreeSet<String>,
}

impl CollectionState {
    pub fn new(collected: BTreeSet<String>, tracked: BTreeSet<String>) -> Self {
        Self { collected, tracked }
    }

    pub fn is_collected(&self, name: &str) -> bool {
        self.collected.contains(name)
    }

    pub fn is_tracked(&self, name: &str) -> bool {
        self.tracked.contains(name)
    }

    /// Collected wins when a name is in both sets.
    pub fn status(&self, name: &str) -> ItemStatus {
        if self.is_collected(name) {
            ItemStatus::Collected
        } else if self.is_tracked(name) {
            ItemStatus::Tracked
        } else {
            ItemStatus::None
        }
    }

    /// none → collected, tracked → collected, collected → none.
    pub fn toggle_collected(&mut self, name: &str) -> ItemStatus {
        if !self.collected.remove(name) {
            self.collected.insert(name.to_string());
            self.tracked.remove(name);
        }
        self.status(name)
    }

    /// none → tracked, tracked → none.
    ///
    /// A collected name is inserted into the tracked set as well; callers are
    /// expected not to offer tracking for collected items.
    pub fn toggle_tracked(&mut self, name: &str) -> ItemStatus {
        if !self.tracked.remove(name) {
            self.tracked.insert(name.to_string());
        }
        self.status(name)
    }

    pub fn is_empty(&self) -> bool {
        self.collected.is_empty() && self.tracked.is_empty()
    }

    /// Items that are tracked but not yet collected, in catalog order.
    pub fn shopping_candidates<'a>(&self, catalog: &'a [CraftableItem]) -> Vec<&'a CraftableItem> {
        catalog
            .iter()
            .filter(|item| self.is_tracked(&item.name) && !self.is_collected(&item.name))
            .collect()
    }

    pub fn shopping_list(&self, catalog: &[CraftableItem]) -> ShoppingList {
        ShoppingList::from_items(self.shopping_candidates(catalog))
    }

    /// Splits the catalog into collected and missing items.
    pub fn checklist<'a>(&self, catalog: &'a [CraftableItem]) -> ChecklistView<'a> {
        let (collected, missing): (Vec<_>, Vec<_>) = catalog
            .iter()
            .partition(|item| self.is_collected(&item.name));
        ChecklistView { collected, missing }
    }
}

/// Catalog items partitioned by collected state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChecklistView<'a> {
    pub collected: Vec<&'a CraftableItem>,
    pub missing: Vec<&'a CraftableItem>,
}

impl ChecklistView<'_> {
    pub fn total(&self) -> usize {
        self.collected.len() + self.missing.len()
    }
}
