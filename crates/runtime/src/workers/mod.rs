//! Worker tasks that back the runtime orchestration.
//!
//! The checklist worker owns the collected/tracked state; handles only ever
//! talk to it through [`Command`]s.

mod checklist;

pub use checklist::{ChecklistWorker, Command};
