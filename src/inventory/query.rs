//! Sorted, read-only views over the inventory.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::scanner::Project;

use super::cache::Inventory;

/// Field projects are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Project name, compared case-insensitively.
    #[default]
    Name,
    /// Total artifact bytes.
    Size,
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// How a query orders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    fn compare(&self, a: &Project, b: &Project) -> Ordering {
        let ordering = match self.field {
            SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            SortField::Size => a.total_artifact_bytes().cmp(&b.total_artifact_bytes()),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "size" => Ok(SortField::Size),
            other => Err(format!("unknown sort field '{}' (expected name or size)", other)),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction '{}' (expected asc or desc)", other)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Name => f.write_str("name"),
            SortField::Size => f.write_str("size"),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Return a sorted copy of `projects`.
///
/// The sort is stable in both directions: descending reverses the
/// comparator, so projects that compare equal keep their original order.
pub fn sort_projects(projects: &[Project], spec: SortSpec) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    sorted.sort_by(|a, b| spec.compare(a, b));
    sorted
}

/// Projects stored under `root`, ordered by `spec`.
///
/// Returns an empty list for an unknown root. The inventory is not modified.
pub fn query(inventory: &Inventory, root: &str, spec: SortSpec) -> Vec<Project> {
    sort_projects(&inventory.get(root), spec)
}
