//! Collected/tracked checklist persistence.
//!
//! [`ChecklistStore`] wraps the pure [`handbook_core::CollectionState`]
//! machine with key-value persistence, reactive reloads and the one-time
//! migration from the single-set legacy layout.

mod store;

pub use store::{
    COLLECTED_KEY, ChecklistSnapshot, ChecklistStore, LEGACY_COLLECTED_KEY, LoadOutcome,
    TRACKED_KEY,
};
