//! Shared display surface payload.
//!
//! The runtime writes the current shopping list and the premium flag into a
//! separate key-value store that a home-screen widget reads on its own
//! schedule. The widget only ever reads; [`WidgetPayload::read`] is its side
//! of the contract.

use std::sync::Arc;

use handbook_core::ShoppingList;
use serde::{Deserialize, Serialize};

use crate::events::{Event, EventBus, WidgetEvent};
use crate::repository::{KeyValueStore, Result};

/// Slot holding the JSON array of [`WidgetLine`]s.
pub const SHOPPING_LIST_KEY: &str = "shoppingList";
/// Slot holding the premium flag as a JSON boolean.
pub const HAS_PREMIUM_KEY: &str = "hasPremium";

/// One shopping list row as the widget displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetLine {
    pub name: String,
    pub count: u32,
}

/// Everything the widget needs to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetPayload {
    pub items: Vec<WidgetLine>,
    pub has_premium: bool,
}

impl WidgetPayload {
    pub fn new(list: &ShoppingList, has_premium: bool) -> Self {
        let items = list
            .lines
            .iter()
            .map(|line| WidgetLine {
                name: line.item_name.clone(),
                count: line.total_count,
            })
            .collect();
        Self { items, has_premium }
    }

    /// Read the payload the way the widget does.
    ///
    /// Missing or corrupt data reads as an empty list, a missing flag as
    /// `false`, and rows with blank names are dropped.
    pub fn read(store: &dyn KeyValueStore) -> Self {
        let has_premium = store
            .get(HAS_PREMIUM_KEY)
            .ok()
            .flatten()
            .and_then(|bytes| serde_json::from_slice::<bool>(&bytes).ok())
            .unwrap_or(false);

        let items = store
            .get(SHOPPING_LIST_KEY)
            .ok()
            .flatten()
            .and_then(|bytes| serde_json::from_slice::<Vec<WidgetLine>>(&bytes).ok())
            .unwrap_or_default()
            .into_iter()
            .filter(|line| !line.name.trim().is_empty())
            .collect();

        Self { items, has_premium }
    }
}

/// Writer side of the display surface.
pub struct WidgetSync {
    store: Arc<dyn KeyValueStore>,
    event_bus: EventBus,
}

impl WidgetSync {
    pub fn new(store: Arc<dyn KeyValueStore>, event_bus: EventBus) -> Self {
        Self { store, event_bus }
    }

    /// Write `payload` and announce the refresh on [`crate::Topic::Widget`].
    pub fn publish(&self, payload: &WidgetPayload) -> Result<()> {
        match self.write(payload) {
            Ok(()) => {
                tracing::debug!(
                    "Published widget payload: {} lines, premium={}",
                    payload.items.len(),
                    payload.has_premium
                );
                self.event_bus.publish(Event::Widget(WidgetEvent::Refreshed {
                    lines: payload.items.len(),
                    has_premium: payload.has_premium,
                }));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to publish widget payload: {}", e);
                self.event_bus
                    .publish(Event::Widget(WidgetEvent::PublishFailed {
                        error: e.to_string(),
                    }));
                Err(e)
            }
        }
    }

    fn write(&self, payload: &WidgetPayload) -> Result<()> {
        let items = serde_json::to_vec(&payload.items)?;
        let has_premium = serde_json::to_vec(&payload.has_premium)?;
        self.store.set(SHOPPING_LIST_KEY, &items)?;
        self.store.set(HAS_PREMIUM_KEY, &has_premium)?;
        self.store.synchronize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Topic;
    use crate::repository::InMemoryKeyValueStore;
    use handbook_core::{Money, ShoppingListLine};

    fn list() -> ShoppingList {
        ShoppingList {
            lines: vec![
                ShoppingListLine::new("Fat", 1),
                ShoppingListLine::new("Perfect Bear Pelt", 7),
            ],
            total_cost: Money::from_cents(100),
        }
    }

    #[test]
    fn test_publish_then_read() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let bus = EventBus::new();
        let mut rx = bus.subscribe(Topic::Widget);
        let sync = WidgetSync::new(store.clone(), bus);

        let payload = WidgetPayload::new(&list(), true);
        sync.publish(&payload).unwrap();

        assert_eq!(WidgetPayload::read(store.as_ref()), payload);
        assert_eq!(
            rx.try_recv().unwrap(),
            Event::Widget(WidgetEvent::Refreshed {
                lines: 2,
                has_premium: true
            })
        );
    }

    #[test]
    fn test_wire_format() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let sync = WidgetSync::new(store.clone(), EventBus::new());
        sync.publish(&WidgetPayload::new(&list(), false)).unwrap();

        let items = store.get(SHOPPING_LIST_KEY).unwrap().unwrap();
        assert_eq!(
            String::from_utf8(items).unwrap(),
            r#"[{"name":"Fat","count":1},{"name":"Perfect Bear Pelt","count":7}]"#
        );
        assert_eq!(store.get(HAS_PREMIUM_KEY).unwrap().unwrap(), b"false");
    }

    #[test]
    fn test_read_defaults_and_filters() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(WidgetPayload::read(&store), WidgetPayload::default());

        store
            .set(
                SHOPPING_LIST_KEY,
                br#"[{"name":"  ","count":3},{"name":"Fat","count":1}]"#,
            )
            .unwrap();
        store.set(HAS_PREMIUM_KEY, b"not a bool").unwrap();

        let payload = WidgetPayload::read(&store);
        assert_eq!(
            payload.items,
            vec![WidgetLine {
                name: "Fat".to_string(),
                count: 1
            }]
        );
        assert!(!payload.has_premium);

        store.set(SHOPPING_LIST_KEY, b"corrupt").unwrap();
        assert!(WidgetPayload::read(&store).items.is_empty());
    }
}
