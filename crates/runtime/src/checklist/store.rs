//! Persisted collected/tracked state.

use std::collections::BTreeSet;
use std::sync::Arc;

use handbook_core::{ChecklistView, CollectionState, CraftableItem, ItemStatus, ShoppingList};
use tracing::{debug, info, warn};

use crate::repository::{KeyValueStore, Result};

/// Slot holding the JSON array of collected item names.
pub const COLLECTED_KEY: &str = "collected_items_v3";
/// Slot holding the JSON array of tracked item names.
pub const TRACKED_KEY: &str = "tracked_items_v1";
/// Pre-tracking layout: a single set of checked names, read only for migration.
pub const LEGACY_COLLECTED_KEY: &str = "checklist_data_v2";

/// What a [`ChecklistStore::reload`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Both sets were read from their slots (missing or corrupt slots read as empty).
    Loaded,
    /// The legacy set was adopted as the collected set and moved to the new layout.
    Migrated { items: usize },
}

/// Catalog items partitioned by collected state, detached from the catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChecklistSnapshot {
    pub collected: Vec<CraftableItem>,
    pub missing: Vec<CraftableItem>,
}

/// Single owner of the collected and tracked name sets.
///
/// Every toggle writes both sets back to the key-value store immediately.
/// Write failures are logged and otherwise ignored: the in-memory state stays
/// authoritative and the next toggle rewrites everything.
pub struct ChecklistStore {
    store: Arc<dyn KeyValueStore>,
    state: CollectionState,
}

impl ChecklistStore {
    /// Open the store and load (or migrate) the persisted state.
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self::load(store).0
    }

    /// Like [`open`](Self::open), also reporting whether a migration ran.
    pub fn load(store: Arc<dyn KeyValueStore>) -> (Self, LoadOutcome) {
        let mut checklist = Self {
            store,
            state: CollectionState::default(),
        };
        let outcome = checklist.reload();
        (checklist, outcome)
    }

    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    pub fn is_collected(&self, name: &str) -> bool {
        self.state.is_collected(name)
    }

    pub fn is_tracked(&self, name: &str) -> bool {
        self.state.is_tracked(name)
    }

    pub fn status(&self, name: &str) -> ItemStatus {
        self.state.status(name)
    }

    /// Flip the collected flag; collecting also clears tracking.
    pub fn toggle_collected(&mut self, name: &str) -> ItemStatus {
        let status = self.state.toggle_collected(name);
        match status {
            ItemStatus::Collected => debug!("Collecting item {}", name),
            _ => debug!("Un-collecting item {}", name),
        }
        self.persist();
        status
    }

    /// Flip the tracked flag. Collected items are not refused.
    pub fn toggle_tracked(&mut self, name: &str) -> ItemStatus {
        if self.state.is_collected(name) {
            debug!("Tracking flag changed on collected item {}", name);
        }
        let status = self.state.toggle_tracked(name);
        if self.state.is_tracked(name) {
            debug!("Tracking item {}", name);
        } else {
            debug!("Un-tracking item {}", name);
        }
        self.persist();
        status
    }

    /// Replace the in-memory state with whatever the store holds.
    ///
    /// Runs the one-time legacy migration first when the new collected slot
    /// has never been written.
    pub fn reload(&mut self) -> LoadOutcome {
        if let Some(items) = self.migrate_legacy() {
            return LoadOutcome::Migrated { items };
        }

        self.state = CollectionState::new(self.read_set(COLLECTED_KEY), self.read_set(TRACKED_KEY));
        info!(
            "Loaded checklist: {} collected, {} tracked",
            self.state.collected.len(),
            self.state.tracked.len()
        );
        LoadOutcome::Loaded
    }

    pub fn shopping_candidates<'a>(&self, catalog: &'a [CraftableItem]) -> Vec<&'a CraftableItem> {
        self.state.shopping_candidates(catalog)
    }

    pub fn shopping_list(&self, catalog: &[CraftableItem]) -> ShoppingList {
        self.state.shopping_list(catalog)
    }

    pub fn checklist<'a>(&self, catalog: &'a [CraftableItem]) -> ChecklistView<'a> {
        self.state.checklist(catalog)
    }

    /// Owned copy of [`checklist`](Self::checklist) for sending across tasks.
    pub fn snapshot(&self, catalog: &[CraftableItem]) -> ChecklistSnapshot {
        let view = self.checklist(catalog);
        ChecklistSnapshot {
            collected: view.collected.into_iter().cloned().collect(),
            missing: view.missing.into_iter().cloned().collect(),
        }
    }

    fn migrate_legacy(&mut self) -> Option<usize> {
        match self.store.get(COLLECTED_KEY) {
            Ok(None) => {}
            Ok(Some(_)) => return None,
            Err(e) => {
                warn!("Could not read {}, skipping migration check: {}", COLLECTED_KEY, e);
                return None;
            }
        }

        let bytes = match self.store.get(LEGACY_COLLECTED_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read legacy checklist data: {}", e);
                return None;
            }
        };

        let legacy: BTreeSet<String> = match serde_json::from_slice(&bytes) {
            Ok(set) => set,
            Err(e) => {
                warn!("Ignoring undecodable legacy checklist data: {}", e);
                return None;
            }
        };

        let items = legacy.len();
        info!("Migrating {} legacy checklist items to collected state", items);

        self.state = CollectionState::new(legacy, self.read_set(TRACKED_KEY));

        // Keep the legacy slot until the new layout is safely written.
        if let Err(e) = self.write_sets() {
            warn!("Failed to persist migrated checklist, keeping legacy data: {}", e);
            return Some(items);
        }
        if let Err(e) = self.store.remove(LEGACY_COLLECTED_KEY) {
            warn!("Failed to clear legacy checklist slot: {}", e);
        }
        self.synchronize();

        Some(items)
    }

    fn read_set(&self, key: &str) -> BTreeSet<String> {
        match self.store.get(key) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!("Corrupt data under {}, treating as empty: {}", key, e);
                BTreeSet::new()
            }),
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                warn!("Failed to read {}, treating as empty: {}", key, e);
                BTreeSet::new()
            }
        }
    }

    fn write_sets(&self) -> Result<()> {
        let collected = serde_json::to_vec(&self.state.collected)?;
        let tracked = serde_json::to_vec(&self.state.tracked)?;
        self.store.set(COLLECTED_KEY, &collected)?;
        self.store.set(TRACKED_KEY, &tracked)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.write_sets() {
            warn!("Failed to persist checklist state: {}", e);
            return;
        }
        self.synchronize();
    }

    fn synchronize(&self) {
        match self.store.synchronize() {
            Ok(()) => debug!("Saved checklist state"),
            Err(e) => warn!("Key-value store synchronize failed: {}", e),
        }
    }
}
