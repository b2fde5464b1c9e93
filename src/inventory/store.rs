use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, SweeperError};

use super::cache::Inventory;

/// File name of the persisted inventory inside the cache directory.
pub const INVENTORY_FILE: &str = "projects.json";

/// Reads and writes the inventory document on disk.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<cache dir>/build-sweeper/projects.json`, if the platform has a
    /// cache directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("build-sweeper").join(INVENTORY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the inventory. A missing file is an empty inventory; an
    /// unreadable or malformed one is `CacheUnreadable`.
    pub fn load(&self) -> Result<Inventory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No inventory yet, starting empty");
                return Ok(Inventory::new());
            }
            Err(e) => {
                return Err(SweeperError::CacheUnreadable {
                    path: self.path.clone(),
                    source: e.into(),
                })
            }
        };

        Inventory::deserialize(&bytes).map_err(|err| match err {
            SweeperError::CacheFormat(source) => SweeperError::CacheUnreadable {
                path: self.path.clone(),
                source: source.into(),
            },
            other => other,
        })
    }

    /// Load the inventory, treating an unreadable document as empty.
    ///
    /// The broken file is left in place; the next `save` overwrites it.
    pub fn load_or_empty(&self) -> Inventory {
        match self.load() {
            Ok(inventory) => inventory,
            Err(err) => {
                tracing::warn!(error = %err, "Discarding unreadable inventory");
                Inventory::new()
            }
        }
    }

    /// Write the inventory, replacing the previous document atomically.
    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        let bytes = inventory.serialize()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SweeperError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).map_err(|e| SweeperError::Io {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| SweeperError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), roots = inventory.len(), "Saved inventory");
        Ok(())
    }
}
