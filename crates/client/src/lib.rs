//! Headless client assembling content, persistence and the runtime.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ Catalog (static content from handbook-content)
//!   ├─→ FileKeyValueStore × 2 (checklist state, widget payload)
//!   └─→ Runtime (checklist worker and event bus)
//! ```
//!
//! Rendering layers receive a [`ChecklistHandle`] and never touch the stores
//! directly.

pub mod config;
pub mod dirs;
pub mod logging;

pub use config::ClientConfig;

use std::sync::Arc;

use anyhow::{Context, Result};
use handbook_content::{Catalog, ContentFactory};
use handbook_runtime::{ChecklistHandle, FileKeyValueStore, Runtime};

/// Top-level client container.
pub struct Client {
    runtime: Runtime,
    catalog: Catalog,
}

impl Client {
    /// Load content, open the stores and start the runtime.
    pub async fn start(config: &ClientConfig) -> Result<Self> {
        tracing::debug!("Loading content from {}", config.data_dir.display());
        let catalog = ContentFactory::new(&config.data_dir)
            .load_catalog()
            .context("Failed to load handbook content")?;
        tracing::info!(
            "Loaded {} animals, {} pelts, {} craftable items",
            catalog.animals().len(),
            catalog.pelts().len(),
            catalog.items().len()
        );

        let checklist_store = FileKeyValueStore::new(config.checklist_dir())
            .context("Failed to open checklist store")?;
        let widget_store =
            FileKeyValueStore::new(config.widget_dir()).context("Failed to open widget store")?;

        let runtime = Runtime::builder()
            .config(config.runtime.clone())
            .catalog(catalog.items().to_vec())
            .checklist_store(Arc::new(checklist_store))
            .widget_store(Arc::new(widget_store))
            .build()
            .await?;

        tracing::info!("Runtime built successfully");
        Ok(Self { runtime, catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn handle(&self) -> ChecklistHandle {
        self.runtime.handle()
    }

    /// Log checklist progress and the current shopping list.
    pub async fn report(&self) -> Result<()> {
        let handle = self.handle();

        let checklist = handle.checklist().await?;
        tracing::info!(
            "Checklist: {}/{} items collected",
            checklist.collected.len(),
            checklist.collected.len() + checklist.missing.len()
        );

        let list = handle.shopping_list().await?;
        if list.is_empty() {
            tracing::info!("Shopping list is empty");
        } else {
            for line in &list.lines {
                tracing::info!("  {} × {}", line.total_count, line.item_name);
            }
            tracing::info!("Total cost: {}", list.total_cost);
        }

        Ok(())
    }

    /// Stop the runtime and wait for the worker to finish.
    pub async fn shutdown(self) -> Result<()> {
        self.runtime.shutdown().await?;
        tracing::info!("Client shutdown complete");
        Ok(())
    }
}
