//! Artifact discovery: classification, traversal, sizing and project
//! aggregation.

mod cancel;
mod kind;
mod options;
mod project;
mod size;
mod walker;

pub use cancel::CancelToken;
pub use kind::{classify, ArtifactKind};
pub use options::ScanOptions;
pub use project::{scan_project, scan_root, ArtifactDir, Project};
pub use size::{format_size, size_of};
pub use walker::{walk, ArtifactMatch};
