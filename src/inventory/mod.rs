//! Persisted, queryable inventory of scan results.
//!
//! This module provides:
//! - The in-memory cache keyed by scan root
//! - JSON persistence of that cache
//! - Sorted read-only queries

mod cache;
mod query;
mod store;

pub use cache::Inventory;
pub use query::{query, sort_projects, SortDirection, SortField, SortSpec};
pub use store::{InventoryStore, INVENTORY_FILE};
