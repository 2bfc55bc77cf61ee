//! Event types for different topics.

use handbook_core::ItemStatus;
use serde::{Deserialize, Serialize};

/// Which toggle produced a [`ChecklistEvent::Toggled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleKind {
    Collected,
    Tracked,
}

/// Events related to collected/tracked state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecklistEvent {
    /// A single item changed through the handle
    Toggled {
        name: String,
        kind: ToggleKind,
        status: ItemStatus,
    },

    /// State was re-read from the key-value store
    Reloaded {
        collected: usize,
        tracked: usize,
        /// True when the reload was triggered by another writer
        external: bool,
    },

    /// Legacy single-set data was moved to the collected slot
    Migrated { items: usize },
}

/// Events related to the shared display surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// A new shopping list payload was written; consumers should refresh
    Refreshed { lines: usize, has_premium: bool },

    /// Writing the payload failed; the previous payload stays in place
    PublishFailed { error: String },
}
