//! High-level runtime orchestrator.
//!
//! The runtime owns the checklist worker, wires up command/event channels, and
//! exposes a builder-based API for the composition root.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use handbook_core::CraftableItem;

use crate::api::{ChecklistHandle, Result, RuntimeError};
use crate::checklist::{ChecklistStore, LoadOutcome};
use crate::events::{Event, EventBus, Topic};
use crate::repository::KeyValueStore;
use crate::widget::WidgetSync;
use crate::workers::{ChecklistWorker, Command};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
    /// Initial premium flag published to the display surface
    pub has_premium: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 32,
            event_buffer_size: 100,
            has_premium: false,
        }
    }
}

/// Main runtime that owns the checklist worker
///
/// [`ChecklistHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: ChecklistHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> ChecklistHandle {
        self.handle.clone()
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every cloned handle has been dropped as well.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Vec<CraftableItem>,
    checklist_store: Option<Arc<dyn KeyValueStore>>,
    widget_store: Option<Arc<dyn KeyValueStore>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: Vec::new(),
            checklist_store: None,
            widget_store: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Craftable items the shopping list and checklist are derived from
    pub fn catalog(mut self, items: Vec<CraftableItem>) -> Self {
        self.catalog = items;
        self
    }

    /// Set required store for the collected and tracked sets
    pub fn checklist_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.checklist_store = Some(store);
        self
    }

    /// Set the store shared with the display surface (optional)
    pub fn widget_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.widget_store = Some(store);
        self
    }

    pub fn has_premium(mut self, has_premium: bool) -> Self {
        self.config.has_premium = has_premium;
        self
    }

    /// Build the runtime and spawn the checklist worker
    pub async fn build(self) -> Result<Runtime> {
        let store = self.checklist_store.ok_or(RuntimeError::MissingStore)?;

        // Subscribe before loading so no change slips in between.
        let external_rx = store.subscribe_external();
        if external_rx.is_none() {
            tracing::debug!("Checklist store does not report external changes");
        }

        let (checklist, outcome) = ChecklistStore::load(store);
        if let LoadOutcome::Migrated { items } = outcome {
            tracing::info!("Migrated {} legacy checklist items during startup", items);
        }

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = ChecklistHandle::new(command_tx, event_bus.clone());

        let mut worker = ChecklistWorker::new(
            checklist,
            Arc::new(self.catalog),
            command_rx,
            external_rx,
            event_bus.clone(),
        );
        if let Some(widget_store) = self.widget_store {
            worker = worker.with_widget(
                WidgetSync::new(widget_store, event_bus),
                self.config.has_premium,
            );
        }

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
