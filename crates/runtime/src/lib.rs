//! Runtime orchestration for the handbook's collected/tracked checklist.
//!
//! This crate wires together key-value persistence, the checklist state
//! machine from `handbook-core`, and a worker task into a cohesive runtime
//! API. Consumers embed [`Runtime`] to toggle items, derive the shopping list,
//! and subscribe to events through [`ChecklistHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`checklist`] persists and migrates the collected/tracked sets
//! - [`widget`] writes the payload read by the home-screen widget
//! - [`repository`] provides the key-value stores
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod checklist;
pub mod events;
pub mod repository;
pub mod runtime;
pub mod widget;

mod workers;

pub use api::{ChecklistHandle, Result, RuntimeError};
pub use checklist::{ChecklistSnapshot, ChecklistStore, LoadOutcome};
pub use events::{ChecklistEvent, Event, EventBus, ToggleKind, Topic, WidgetEvent};
pub use repository::{
    ExternalChange, FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use widget::{WidgetLine, WidgetPayload, WidgetSync};
