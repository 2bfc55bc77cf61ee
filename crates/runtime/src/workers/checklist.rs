//! Checklist worker that owns the authoritative [`ChecklistStore`].
//!
//! Receives commands from [`ChecklistHandle`](crate::ChecklistHandle) and
//! external change notifications from the key-value store on the same task,
//! so every mutation and reload happens in one place.

use std::sync::Arc;

use handbook_core::{CollectionState, CraftableItem, ItemStatus, ShoppingList};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::checklist::{
    COLLECTED_KEY, ChecklistSnapshot, ChecklistStore, LEGACY_COLLECTED_KEY, LoadOutcome,
    TRACKED_KEY,
};
use crate::events::{ChecklistEvent, Event, EventBus, ToggleKind};
use crate::repository::ExternalChange;
use crate::widget::{WidgetPayload, WidgetSync};

/// Commands that can be sent to the checklist worker
pub enum Command {
    ToggleCollected {
        name: String,
        reply: oneshot::Sender<ItemStatus>,
    },
    ToggleTracked {
        name: String,
        reply: oneshot::Sender<ItemStatus>,
    },
    Status {
        name: String,
        reply: oneshot::Sender<ItemStatus>,
    },
    IsCollected {
        name: String,
        reply: oneshot::Sender<bool>,
    },
    IsTracked {
        name: String,
        reply: oneshot::Sender<bool>,
    },
    /// Query the current sets (read-only copy).
    QueryState {
        reply: oneshot::Sender<CollectionState>,
    },
    /// Tracked, not yet collected catalog items.
    ShoppingCandidates {
        reply: oneshot::Sender<Vec<CraftableItem>>,
    },
    ShoppingList {
        reply: oneshot::Sender<ShoppingList>,
    },
    Checklist {
        reply: oneshot::Sender<ChecklistSnapshot>,
    },
    /// Change the premium flag shown on the display surface.
    SetPremium {
        has_premium: bool,
        reply: oneshot::Sender<()>,
    },
    /// Re-read both sets from the key-value store.
    Reload {
        reply: oneshot::Sender<LoadOutcome>,
    },
}

/// Background task that processes checklist commands.
pub struct ChecklistWorker {
    store: ChecklistStore,
    catalog: Arc<Vec<CraftableItem>>,
    widget: Option<WidgetSync>,
    has_premium: bool,
    command_rx: mpsc::Receiver<Command>,
    external_rx: Option<broadcast::Receiver<ExternalChange>>,
    event_bus: EventBus,
}

impl ChecklistWorker {
    pub fn new(
        store: ChecklistStore,
        catalog: Arc<Vec<CraftableItem>>,
        command_rx: mpsc::Receiver<Command>,
        external_rx: Option<broadcast::Receiver<ExternalChange>>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            "ChecklistWorker initialized with {} catalog items, {} collected, {} tracked",
            catalog.len(),
            store.state().collected.len(),
            store.state().tracked.len()
        );

        Self {
            store,
            catalog,
            widget: None,
            has_premium: false,
            command_rx,
            external_rx,
            event_bus,
        }
    }

    /// Attach the display surface writer.
    pub fn with_widget(mut self, widget: WidgetSync, has_premium: bool) -> Self {
        self.widget = Some(widget);
        self.has_premium = has_premium;
        self
    }

    /// Main worker loop.
    ///
    /// Exits once every handle has been dropped.
    pub async fn run(mut self) {
        self.sync_widget();

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                change = recv_external(&mut self.external_rx), if self.external_rx.is_some() => {
                    self.handle_external(change);
                }
            }
        }

        debug!("ChecklistWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::ToggleCollected { name, reply } => {
                let status = self.store.toggle_collected(&name);
                self.after_toggle(name, ToggleKind::Collected, status);
                let _ = reply.send(status);
            }
            Command::ToggleTracked { name, reply } => {
                let status = self.store.toggle_tracked(&name);
                self.after_toggle(name, ToggleKind::Tracked, status);
                let _ = reply.send(status);
            }
            Command::Status { name, reply } => {
                let _ = reply.send(self.store.status(&name));
            }
            Command::IsCollected { name, reply } => {
                let _ = reply.send(self.store.is_collected(&name));
            }
            Command::IsTracked { name, reply } => {
                let _ = reply.send(self.store.is_tracked(&name));
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.store.state().clone());
            }
            Command::ShoppingCandidates { reply } => {
                let items = self
                    .store
                    .shopping_candidates(&self.catalog)
                    .into_iter()
                    .cloned()
                    .collect();
                let _ = reply.send(items);
            }
            Command::ShoppingList { reply } => {
                let _ = reply.send(self.store.shopping_list(&self.catalog));
            }
            Command::Checklist { reply } => {
                let _ = reply.send(self.store.snapshot(&self.catalog));
            }
            Command::SetPremium { has_premium, reply } => {
                if self.has_premium != has_premium {
                    info!("Premium flag changed to {}", has_premium);
                    self.has_premium = has_premium;
                    self.sync_widget();
                }
                let _ = reply.send(());
            }
            Command::Reload { reply } => {
                let outcome = self.reload(false);
                let _ = reply.send(outcome);
            }
        }
    }

    fn handle_external(&mut self, change: Result<ExternalChange, RecvError>) {
        match change {
            Ok(change) => {
                let relevant = change.keys.is_empty()
                    || [COLLECTED_KEY, TRACKED_KEY, LEGACY_COLLECTED_KEY]
                        .iter()
                        .any(|key| change.touches(key));
                if relevant {
                    debug!("External change to {:?}, reloading", change.keys);
                    self.reload(true);
                } else {
                    debug!("Ignoring external change to {:?}", change.keys);
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Missed {} external change notifications, reloading", skipped);
                self.reload(true);
            }
            Err(RecvError::Closed) => {
                info!("External change channel closed");
                self.external_rx = None;
            }
        }
    }

    fn after_toggle(&mut self, name: String, kind: ToggleKind, status: ItemStatus) {
        self.event_bus
            .publish(Event::Checklist(ChecklistEvent::Toggled { name, kind, status }));
        self.sync_widget();
    }

    fn reload(&mut self, external: bool) -> LoadOutcome {
        let outcome = self.store.reload();
        if let LoadOutcome::Migrated { items } = outcome {
            self.event_bus
                .publish(Event::Checklist(ChecklistEvent::Migrated { items }));
        }

        let state = self.store.state();
        self.event_bus
            .publish(Event::Checklist(ChecklistEvent::Reloaded {
                collected: state.collected.len(),
                tracked: state.tracked.len(),
                external,
            }));

        self.sync_widget();
        outcome
    }

    fn sync_widget(&self) {
        let Some(widget) = &self.widget else {
            return;
        };
        let list = self.store.shopping_list(&self.catalog);
        // Failures are logged and announced by the widget writer.
        let _ = widget.publish(&WidgetPayload::new(&list, self.has_premium));
    }
}

async fn recv_external(
    rx: &mut Option<broadcast::Receiver<ExternalChange>>,
) -> Result<ExternalChange, RecvError> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
