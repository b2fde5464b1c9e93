//! Classification of directory names into build-artifact kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized class of build-artifact directory.
///
/// The set is closed: a directory is an artifact only if its name matches
/// one of these exactly. The serialized tag is the variant name, except
/// `UnderscoreBuild` which is stored as `_Build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// Version-control metadata (`.git`).
    Git,
    /// JavaScript dependency cache (`node_modules`).
    NodeModules,
    /// Rust/JVM compiled output (`target`).
    Target,
    /// Elixir/Erlang compiled output (`_build`).
    #[serde(rename = "_Build")]
    UnderscoreBuild,
    /// C/C++ and generic build output (`build`).
    Build,
    /// Distribution bundles (`dist`).
    Dist,
    /// Vendored dependencies (`vendor`).
    Vendor,
    /// Generic output folder (`out`).
    Out,
    /// Zig toolchain output (`zig-out`).
    ZigOut,
}

impl ArtifactKind {
    /// Every recognized kind, in declaration order.
    pub const ALL: [ArtifactKind; 9] = [
        ArtifactKind::Git,
        ArtifactKind::NodeModules,
        ArtifactKind::Target,
        ArtifactKind::UnderscoreBuild,
        ArtifactKind::Build,
        ArtifactKind::Dist,
        ArtifactKind::Vendor,
        ArtifactKind::Out,
        ArtifactKind::ZigOut,
    ];

    /// The exact directory name this kind is recognized by.
    pub fn dir_name(self) -> &'static str {
        match self {
            ArtifactKind::Git => ".git",
            ArtifactKind::NodeModules => "node_modules",
            ArtifactKind::Target => "target",
            ArtifactKind::UnderscoreBuild => "_build",
            ArtifactKind::Build => "build",
            ArtifactKind::Dist => "dist",
            ArtifactKind::Vendor => "vendor",
            ArtifactKind::Out => "out",
            ArtifactKind::ZigOut => "zig-out",
        }
    }

    /// Human-readable label (e.g., "Rust/JVM target").
    pub fn display_name(self) -> &'static str {
        match self {
            ArtifactKind::Git => "Git metadata",
            ArtifactKind::NodeModules => "Node modules",
            ArtifactKind::Target => "Rust/JVM target",
            ArtifactKind::UnderscoreBuild => "Elixir/Erlang build",
            ArtifactKind::Build => "Build output",
            ArtifactKind::Dist => "Distribution",
            ArtifactKind::Vendor => "Vendored deps",
            ArtifactKind::Out => "Output",
            ArtifactKind::ZigOut => "Zig output",
        }
    }

    /// Whether deleting this directory only costs a rebuild.
    ///
    /// Version-control metadata is reported but never counts as reclaimable.
    pub fn is_reclaimable(self) -> bool {
        !matches!(self, ArtifactKind::Git)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Classify a single directory name.
///
/// Exact, case-sensitive match on the whole name; no filesystem access.
pub fn classify(name: &str) -> Option<ArtifactKind> {
    ArtifactKind::ALL
        .into_iter()
        .find(|kind| kind.dir_name() == name)
}
