//! Shopping list aggregation.
//!
//! Reduces a set of craftable items into one line per distinct ingredient,
//! summing the counts of every reference. Grouping is by exact trimmed name
//! and the output is sorted by name, so the input order never matters.

use std::collections::BTreeMap;

use crate::ingredient::parse;
use crate::item::CraftableItem;
use crate::money::Money;

/// One aggregated ingredient requirement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShoppingListLine {
    pub item_name: String,
    pub total_count: u32,
}

impl ShoppingListLine {
    pub fn new(item_name: impl Into<String>, total_count: u32) -> Self {
        Self {
            item_name: item_name.into(),
            total_count,
        }
    }
}

/// Aggregated ingredients plus the combined price of the items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShoppingList {
    pub lines: Vec<ShoppingListLine>,
    pub total_cost: Money,
}

impl ShoppingList {
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a CraftableItem>,
        I::IntoIter: Clone,
    {
        let items = items.into_iter();
        Self {
            lines: aggregate(items.clone()),
            total_cost: total_cost(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of ingredient units across all lines.
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.total_count)).sum()
    }
}

/// Groups every ingredient of `items` by name and sums the quantities.
///
/// Ingredients whose parsed name is empty are dropped. The result holds one
/// line per distinct name, sorted ascending by byte order.
pub fn aggregate<'a, I>(items: I) -> Vec<ShoppingListLine>
where
    I: IntoIterator<Item = &'a CraftableItem>,
{
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();

    for item in items {
        for raw in &item.ingredients {
            let ingredient = parse(raw);
            if ingredient.item_name.is_empty() {
                continue;
            }
            let count = counts.entry(ingredient.item_name).or_default();
            *count = count.saturating_add(ingredient.quantity);
        }
    }

    counts
        .into_iter()
        .map(|(item_name, total_count)| ShoppingListLine {
            item_name,
            total_count,
        })
        .collect()
}

/// Sum of the prices of `items`; unpriced items contribute nothing.
pub fn total_cost<'a, I>(items: I) -> Money
where
    I: IntoIterator<Item = &'a CraftableItem>,
{
    items.into_iter().filter_map(|item| item.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, ItemKind};

    fn item(name: &str, ingredients: &[&str]) -> CraftableItem {
        CraftableItem::new(ItemId::new(name), name, ItemKind::Trapper)
            .with_ingredients(ingredients.iter().copied())
    }

    fn lines(pairs: &[(&str, u32)]) -> Vec<ShoppingListLine> {
        pairs
            .iter()
            .map(|(name, count)| ShoppingListLine::new(*name, *count))
            .collect()
    }

    #[test]
    fn test_sums_across_items() {
        let items = [
            item("Hat", &["x5 Perfect Bear Pelt", "x1 Fat"]),
            item("Coat", &["x2 Perfect Bear Pelt"]),
        ];

        assert_eq!(
            aggregate(&items),
            lines(&[("Fat", 1), ("Perfect Bear Pelt", 7)])
        );
    }

    #[test]
    fn test_empty_input() {
        let none: [CraftableItem; 0] = [];
        assert!(aggregate(&none).is_empty());
        assert!(aggregate(&[item("Bare", &[])]).is_empty());
    }

    #[test]
    fn test_drops_empty_names() {
        let items = [item("Hat", &["", "   ", "x3 ", "x5   ", "Fat"])];
        // A count followed only by whitespace names nothing.
        assert_eq!(aggregate(&items), lines(&[("Fat", 1)]));
    }

    #[test]
    fn test_groups_by_trimmed_name() {
        let items = [item("Hat", &["  Fat", "Fat  ", "x2 Fat"])];
        assert_eq!(aggregate(&items), lines(&[("Fat", 4)]));
    }

    #[test]
    fn test_large_counts_group_under_name() {
        let items = [item("Hat", &["x5000000000 Fat", "x2 Fat"])];
        assert_eq!(aggregate(&items), lines(&[("Fat", u32::MAX)]));
    }

    #[test]
    fn test_order_independent() {
        let a = item("A", &["x2 Perfect Bear Pelt", "Legendary Bear Pelt"]);
        let b = item("B", &["x3 Fat", "x1 Perfect Bear Pelt"]);
        let c = item("C", &["Big Game Meat", "x4 Fat"]);

        let forward = aggregate([&a, &b, &c]);
        for permutation in [[&a, &c, &b], [&b, &a, &c], [&b, &c, &a], [&c, &a, &b], [&c, &b, &a]] {
            assert_eq!(aggregate(permutation), forward);
        }
    }

    #[test]
    fn test_split_batches_sum_to_whole() {
        let a = item("A", &["x2 Perfect Bear Pelt"]);
        let b = item("B", &["x3 Fat"]);
        let c = item("C", &["x4 Feather", "Big Game Meat"]);

        let mut combined: BTreeMap<String, u32> = BTreeMap::new();
        for line in aggregate([&a, &b]).into_iter().chain(aggregate([&c])) {
            *combined.entry(line.item_name).or_default() += line.total_count;
        }
        let manual: Vec<ShoppingListLine> = combined
            .into_iter()
            .map(|(name, count)| ShoppingListLine::new(name, count))
            .collect();

        assert_eq!(aggregate([&a, &b, &c]), manual);
    }

    #[test]
    fn test_sorted_by_byte_order() {
        let items = [item("Hat", &["beaver", "Zebra", "Antelope", "ant"])];
        let names: Vec<_> = aggregate(&items)
            .into_iter()
            .map(|line| line.item_name)
            .collect();
        assert_eq!(names, ["Antelope", "Zebra", "ant", "beaver"]);
    }

    #[test]
    fn test_total_cost_skips_unpriced() {
        let items = [
            item("Hat", &[]).with_price(Money::from_cents(1250)),
            CraftableItem::new(ItemId::new("camp"), "Rug", ItemKind::Camp),
            item("Coat", &[]).with_price(Money::from_cents(4000)),
        ];

        assert_eq!(total_cost(&items), Money::from_cents(5250));

        let none: [CraftableItem; 0] = [];
        assert_eq!(total_cost(&none), Money::ZERO);
    }

    #[test]
    fn test_shopping_list_from_items() {
        let items = [
            item("Hat", &["x5 Perfect Bear Pelt", "x1 Fat"]).with_price(Money::from_cents(900)),
            item("Coat", &["x2 Perfect Bear Pelt"]),
        ];

        let list = ShoppingList::from_items(&items);
        assert_eq!(list.lines, lines(&[("Fat", 1), ("Perfect Bear Pelt", 7)]));
        assert_eq!(list.total_cost, Money::from_cents(900));
        assert_eq!(list.total_units(), 8);
        assert!(!list.is_empty());
        assert!(ShoppingList::default().is_empty());
    }
}
