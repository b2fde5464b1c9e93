use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;

use super::kind::{classify, ArtifactKind};
use super::options::ScanOptions;

/// A directory recognized as a build artifact during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactMatch {
    /// Full path to the artifact directory
    pub path: PathBuf,
    /// What kind of artifact it is
    pub kind: ArtifactKind,
}

/// Walk `root` depth-first and report every artifact directory.
///
/// Siblings are visited in file-name order. Matched directories are not
/// descended into, so nothing nested inside an artifact is reported.
/// Symlinks are never followed, and directories that cannot be read are
/// skipped without aborting the rest of the walk.
pub fn walk(root: &Path, options: &ScanOptions) -> Result<Vec<ArtifactMatch>> {
    let mut walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut entries = walker.into_iter();
    let mut matches = Vec::new();

    while let Some(result) = entries.next() {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(error = %err, "Skipping unreadable directory");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        options.cancel.check()?;

        if let Some(kind) = classify(&entry.file_name().to_string_lossy()) {
            tracing::trace!(path = %entry.path().display(), %kind, "Found artifact directory");
            matches.push(ArtifactMatch {
                path: entry.into_path(),
                kind,
            });
            entries.skip_current_dir();
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SweeperError;
    use crate::scanner::CancelToken;
    use std::fs;
    use tempfile::TempDir;

    fn kinds(matches: &[ArtifactMatch]) -> Vec<ArtifactKind> {
        matches.iter().map(|m| m.kind).collect()
    }

    #[test]
    fn test_walk_finds_artifacts() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("app/node_modules/lodash")).unwrap();
        fs::create_dir_all(tmp.path().join("app/src")).unwrap();
        fs::create_dir_all(tmp.path().join("lib/target/debug")).unwrap();

        let matches = walk(tmp.path(), &ScanOptions::default()).unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(
            kinds(&matches),
            vec![ArtifactKind::NodeModules, ArtifactKind::Target]
        );
        assert!(matches[0].path.ends_with("app/node_modules"));
        assert!(matches[1].path.ends_with("lib/target"));
    }

    #[test]
    fn test_walk_prunes_inside_artifacts() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("node_modules/pkg/dist")).unwrap();
        fs::create_dir_all(tmp.path().join("node_modules/pkg/node_modules/inner/build")).unwrap();
        fs::create_dir_all(tmp.path().join("node_modules/.git")).unwrap();

        let matches = walk(tmp.path(), &ScanOptions::default()).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, ArtifactKind::NodeModules);
    }

    #[test]
    fn test_walk_order_is_lexical() {
        let tmp = TempDir::new().unwrap();
        for name in ["zeta", "alpha", "Mid", "beta"] {
            fs::create_dir_all(tmp.path().join(name).join("dist")).unwrap();
        }

        let first = walk(tmp.path(), &ScanOptions::default()).unwrap();
        let second = walk(tmp.path(), &ScanOptions::default()).unwrap();

        assert_eq!(first, second);
        let parents: Vec<_> = first
            .iter()
            .map(|m| {
                m.path.parent().unwrap().file_name().unwrap().to_string_lossy().into_owned()
            })
            .collect();
        assert_eq!(parents, vec!["Mid", "alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_walk_ignores_files_named_like_artifacts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("build"), b"not a dir").unwrap();
        fs::create_dir_all(tmp.path().join("targets")).unwrap();

        let matches = walk(tmp.path(), &ScanOptions::default()).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_walk_classifies_root_itself() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("target");
        fs::create_dir_all(root.join("debug/build")).unwrap();

        let matches = walk(&root, &ScanOptions::default()).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].path, root);
        assert_eq!(matches[0].kind, ArtifactKind::Target);
    }

    #[test]
    fn test_walk_does_not_follow_symlinks() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("real");
        fs::create_dir_all(real.join("dist")).unwrap();
        let project = tmp.path().join("project");
        fs::create_dir_all(&project).unwrap();
        std::os::unix::fs::symlink(&real, project.join("linked")).unwrap();
        std::os::unix::fs::symlink(&project, project.join("self")).unwrap();
        std::os::unix::fs::symlink(&real, project.join("out")).unwrap();

        let matches = walk(&project, &ScanOptions::default()).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_walk_respects_max_depth() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/b/c/target")).unwrap();
        fs::create_dir_all(tmp.path().join("a/dist")).unwrap();

        let options = ScanOptions::new().with_max_depth(2);
        let matches = walk(tmp.path(), &options).unwrap();

        assert_eq!(kinds(&matches), vec![ArtifactKind::Dist]);
    }

    #[test]
    fn test_walk_continues_past_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("a-locked");
        fs::create_dir_all(locked.join("inner")).unwrap();
        fs::create_dir_all(tmp.path().join("b-open/vendor")).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = walk(tmp.path(), &ScanOptions::default());

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let matches = result.unwrap();
        assert_eq!(kinds(&matches), vec![ArtifactKind::Vendor]);
    }

    #[test]
    fn test_walk_cancelled() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/dist")).unwrap();

        let cancel = CancelToken::new();
        cancel.cancel();
        let options = ScanOptions::new().with_cancel(cancel);

        assert!(matches!(
            walk(tmp.path(), &options),
            Err(SweeperError::Cancelled)
        ));
    }
}
