//! Cloneable façade for issuing commands to the runtime.
//!
//! [`ChecklistHandle`] hides channel plumbing and offers async helpers for
//! toggling items, querying derived views, or streaming events from specific
//! topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use handbook_core::{CollectionState, CraftableItem, ItemStatus, ShoppingList};

use super::errors::{Result, RuntimeError};
use crate::checklist::{ChecklistSnapshot, LoadOutcome};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct ChecklistHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl ChecklistHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Flip the collected flag of `name` and return its new status.
    ///
    /// Collecting a tracked item also clears its tracking.
    pub async fn toggle_collected(&self, name: impl Into<String>) -> Result<ItemStatus> {
        let name = name.into();
        self.request(|reply| Command::ToggleCollected { name, reply })
            .await
    }

    /// Flip the tracked flag of `name` and return its new status.
    pub async fn toggle_tracked(&self, name: impl Into<String>) -> Result<ItemStatus> {
        let name = name.into();
        self.request(|reply| Command::ToggleTracked { name, reply })
            .await
    }

    pub async fn status(&self, name: impl Into<String>) -> Result<ItemStatus> {
        let name = name.into();
        self.request(|reply| Command::Status { name, reply }).await
    }

    pub async fn is_collected(&self, name: impl Into<String>) -> Result<bool> {
        let name = name.into();
        self.request(|reply| Command::IsCollected { name, reply })
            .await
    }

    pub async fn is_tracked(&self, name: impl Into<String>) -> Result<bool> {
        let name = name.into();
        self.request(|reply| Command::IsTracked { name, reply })
            .await
    }

    /// Query the current collected and tracked sets (read-only copy)
    pub async fn query_state(&self) -> Result<CollectionState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Catalog items that are tracked but not collected, in catalog order
    pub async fn shopping_candidates(&self) -> Result<Vec<CraftableItem>> {
        self.request(|reply| Command::ShoppingCandidates { reply })
            .await
    }

    pub async fn shopping_list(&self) -> Result<ShoppingList> {
        self.request(|reply| Command::ShoppingList { reply }).await
    }

    /// Catalog partitioned into collected and missing items
    pub async fn checklist(&self) -> Result<ChecklistSnapshot> {
        self.request(|reply| Command::Checklist { reply }).await
    }

    /// Change the premium flag published to the display surface
    pub async fn set_premium(&self, has_premium: bool) -> Result<()> {
        self.request(|reply| Command::SetPremium { has_premium, reply })
            .await
    }

    /// Re-read persisted state, running the legacy migration if needed
    pub async fn reload(&self) -> Result<LoadOutcome> {
        self.request(|reply| Command::Reload { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Checklist` - Toggles, reloads and migrations
    /// - `Topic::Widget` - Display surface refreshes
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use handbook_runtime::Topic;
    ///
    /// let mut checklist_rx = handle.subscribe(Topic::Checklist);
    /// while let Ok(event) = checklist_rx.recv().await {
    ///     // Re-render rows
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
