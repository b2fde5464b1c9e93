//! Project records and the scanner that builds them.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SweeperError};

use super::kind::ArtifactKind;
use super::options::ScanOptions;
use super::size::size_of;
use super::walker::{walk, ArtifactMatch};

/// One artifact directory found inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDir {
    /// Kind of artifact directory.
    #[serde(rename = "dir")]
    pub kind: ArtifactKind,
    /// Total apparent size in bytes.
    #[serde(rename = "size")]
    pub size_bytes: u64,
}

/// A project directory summarized by its artifact directories.
///
/// `total_artifact_bytes` and `has_artifacts` are derived from `artifacts`
/// in [`Project::new`] and cannot be changed afterwards. Deserializing
/// recomputes them from `build_dirs` rather than trusting the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawProject")]
pub struct Project {
    name: String,
    path: String,
    #[serde(rename = "full_build_size")]
    total_artifact_bytes: u64,
    #[serde(rename = "has_build_dirs")]
    has_artifacts: bool,
    #[serde(rename = "build_dirs")]
    artifacts: Vec<ArtifactDir>,
}

/// On-disk project record; the stored totals are ignored.
#[derive(Deserialize)]
struct RawProject {
    name: String,
    path: String,
    #[serde(rename = "build_dirs")]
    artifacts: Vec<ArtifactDir>,
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        Self {
            name: raw.name,
            path: raw.path,
            total_artifact_bytes: raw.artifacts.iter().map(|a| a.size_bytes).sum(),
            has_artifacts: !raw.artifacts.is_empty(),
            artifacts: raw.artifacts,
        }
    }
}

impl Project {
    /// Build a project record for `path` from its artifact directories.
    pub fn new(path: &Path, artifacts: Vec<ArtifactDir>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            name,
            path: path.display().to_string(),
            total_artifact_bytes: artifacts.iter().map(|a| a.size_bytes).sum(),
            has_artifacts: !artifacts.is_empty(),
            artifacts,
        }
    }

    /// Final segment of the project path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute project path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Sum of all artifact sizes, in bytes.
    pub fn total_artifact_bytes(&self) -> u64 {
        self.total_artifact_bytes
    }

    /// Whether any artifact directory was found.
    pub fn has_artifacts(&self) -> bool {
        self.has_artifacts
    }

    /// Artifact directories in traversal order.
    pub fn artifacts(&self) -> &[ArtifactDir] {
        &self.artifacts
    }

    /// Bytes that could be freed without losing history.
    ///
    /// Excludes version-control metadata, so a project whose only artifact
    /// is `.git` reports 0.
    pub fn reclaimable_bytes(&self) -> u64 {
        self.artifacts
            .iter()
            .filter(|a| a.kind.is_reclaimable())
            .map(|a| a.size_bytes)
            .sum()
    }
}

/// Scan a single project directory.
///
/// Every artifact directory anywhere below `path` is attributed to this
/// project. If `path` is itself an artifact directory the project holds
/// exactly that one artifact.
pub fn scan_project(path: &Path, options: &ScanOptions) -> Result<Project> {
    let root = resolve_root(path)?;
    tracing::info!(path = %root.display(), "Scanning project");

    let matches = walk(&root, options)?;
    let artifacts = size_matches(&matches, options)?;

    Ok(Project::new(&root, artifacts))
}

/// Scan a root folder for every project containing artifact directories.
///
/// A project is the parent directory of one or more artifact directories.
/// Projects are returned in path order; each project's artifacts keep
/// traversal order.
pub fn scan_root(root: &Path, options: &ScanOptions) -> Result<Vec<Project>> {
    let root = resolve_root(root)?;
    tracing::info!(root = %root.display(), "Scanning for projects");

    let matches = walk(&root, options)?;
    let artifacts = size_matches(&matches, options)?;

    if matches.first().is_some_and(|m| m.path == root) {
        return Ok(vec![Project::new(&root, artifacts)]);
    }

    let mut grouped: BTreeMap<PathBuf, Vec<ArtifactDir>> = BTreeMap::new();
    for (found, artifact) in matches.iter().zip(artifacts) {
        let project_dir = found.path.parent().unwrap_or(root.as_path());
        grouped
            .entry(project_dir.to_path_buf())
            .or_default()
            .push(artifact);
    }

    let projects: Vec<Project> = grouped
        .into_iter()
        .map(|(path, artifacts)| Project::new(&path, artifacts))
        .collect();

    tracing::info!(
        root = %root.display(),
        projects = projects.len(),
        "Scan complete"
    );

    Ok(projects)
}

/// Check that `path` is an existing directory and make it absolute.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let is_dir = fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return Err(SweeperError::InvalidRoot(path.to_path_buf()));
    }

    path.canonicalize().map_err(|e| SweeperError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Size every match, in parallel, keeping match order.
fn size_matches(matches: &[ArtifactMatch], options: &ScanOptions) -> Result<Vec<ArtifactDir>> {
    let size_all = || {
        matches
            .par_iter()
            .map(|found| {
                Ok(ArtifactDir {
                    kind: found.kind,
                    size_bytes: size_of(&found.path, &options.cancel)?,
                })
            })
            .collect::<Result<Vec<_>>>()
    };

    if options.threads == 0 {
        return size_all();
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()?;

    pool.install(size_all)
}
