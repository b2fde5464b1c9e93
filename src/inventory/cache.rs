use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, SweeperError};
use crate::scanner::Project;

type Entries = BTreeMap<String, Vec<Project>>;

/// In-memory inventory of scan results, keyed by scan-root path.
///
/// The inventory owns every project it stores; readers get clones. Entries
/// are only ever replaced whole, so concurrent `put`s for different roots
/// never observe each other's partial state.
#[derive(Debug, Default)]
pub struct Inventory {
    entries: RwLock<Entries>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects stored for `root`, or an empty list if it was never scanned.
    pub fn get(&self, root: &str) -> Vec<Project> {
        self.read().get(root).cloned().unwrap_or_default()
    }

    /// Replace everything stored for `root`.
    pub fn put(&self, root: impl Into<String>, projects: Vec<Project>) {
        let root = root.into();
        tracing::debug!(%root, projects = projects.len(), "Updating inventory entry");
        self.write().insert(root, projects);
    }

    /// Drop the entry for `root`. Returns whether it existed.
    pub fn remove(&self, root: &str) -> bool {
        self.write().remove(root).is_some()
    }

    pub fn contains(&self, root: &str) -> bool {
        self.read().contains_key(root)
    }

    /// All scan roots, in path order.
    pub fn roots(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Encode as a JSON object mapping each root to its projects.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(&*self.read()).map_err(SweeperError::Serialize)
    }

    /// Decode a document produced by [`Inventory::serialize`].
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let entries: Entries = serde_json::from_slice(bytes).map_err(SweeperError::CacheFormat)?;
        Ok(Self {
            entries: RwLock::new(entries),
        })
    }

    // A panicking writer can only have been inside `insert`/`remove`, which
    // leave the map intact, so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for Inventory {
    fn clone(&self) -> Self {
        Self {
            entries: RwLock::new(self.read().clone()),
        }
    }
}

impl PartialEq for Inventory {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        *self.read() == *other.read()
    }
}

impl Eq for Inventory {}
