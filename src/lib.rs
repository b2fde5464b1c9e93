//! Build Sweeper - find, size and cache reclaimable build-artifact directories
//!
//! This crate provides functionality for:
//! - Classifying directories such as `target/` and `node_modules/`
//! - Walking project trees and sizing the artifacts found
//! - Caching per-root results and querying them in sorted order

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod scanner;
pub mod signals;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SweeperError};
pub use inventory::{query, Inventory, InventoryStore, SortDirection, SortField, SortSpec};
pub use scanner::{scan_project, scan_root, ArtifactDir, ArtifactKind, Project, ScanOptions};
