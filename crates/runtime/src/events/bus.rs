//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{ChecklistEvent, WidgetEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Collected/tracked changes and reloads
    Checklist,
    /// Display surface refreshes
    Widget,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Checklist(ChecklistEvent),
    Widget(WidgetEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Checklist(_) => Topic::Checklist,
            Event::Widget(_) => Topic::Widget,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Cloning shares the underlying channels.
#[derive(Clone)]
pub struct EventBus {
    checklist: broadcast::Sender<Event>,
    widget: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            checklist: broadcast::channel(capacity).0,
            widget: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Checklist => &self.checklist,
            Topic::Widget => &self.widget,
        }
    }

    /// Publish an event to its corresponding topic
    ///
    /// Events are best-effort: publishing with no subscribers is not an error.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_routed_by_topic() {
        let bus = EventBus::new();
        let mut checklist_rx = bus.subscribe(Topic::Checklist);
        let mut widget_rx = bus.subscribe(Topic::Widget);

        let event = Event::Widget(WidgetEvent::Refreshed {
            lines: 2,
            has_premium: true,
        });
        bus.publish(event.clone());

        assert_eq!(widget_rx.try_recv().unwrap(), event);
        assert!(checklist_rx.try_recv().is_err());
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::with_capacity(0);
        bus.publish(Event::Checklist(ChecklistEvent::Migrated { items: 1 }));

        let clone = bus.clone();
        let mut rx = bus.subscribe_multiple(&[Topic::Checklist]);
        clone.publish(Event::Checklist(ChecklistEvent::Migrated { items: 2 }));
        assert_eq!(
            rx.get_mut(&Topic::Checklist).unwrap().try_recv().unwrap(),
            Event::Checklist(ChecklistEvent::Migrated { items: 2 })
        );
    }
}
