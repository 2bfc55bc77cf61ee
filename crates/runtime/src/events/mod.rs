//! Topic-based event bus for runtime events.
//!
//! Rendering layers subscribe to the topics they need instead of observing
//! the checklist state directly.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ChecklistEvent, ToggleKind, WidgetEvent};
