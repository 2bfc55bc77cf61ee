//! Pure domain logic for the hunting handbook.
//!
//! `handbook-core` defines the craftable item model, the ingredient parser,
//! the shopping list aggregator and the collected/tracked state machine.
//! Nothing here performs I/O: content loading lives in `handbook-content`
//! and persistence in `handbook-runtime`, both of which build on the types
//! re-exported here.
pub mod checklist;
pub mod ingredient;
pub mod item;
pub mod money;
pub mod shopping;

pub use checklist::{ChecklistView, CollectionState, ItemStatus};
pub use ingredient::{ParsedIngredient, parse};
pub use item::{CraftableItem, ItemId, ItemKind};
pub use money::{Money, MoneyError};
pub use shopping::{ShoppingList, ShoppingListLine, aggregate, total_cost};
