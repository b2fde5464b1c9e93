//! Subcommand implementations.

pub mod cache;
pub mod list;
pub mod scan;

use std::path::{Path, PathBuf};

use crate::cli::SortArgs;
use crate::config::Config;
use crate::inventory::{Inventory, InventoryStore, SortSpec};
use crate::error::Result;
use crate::scanner::{format_size, scan_root, Project, ScanOptions};

/// State shared by every subcommand, built once in `main`.
pub struct Session {
    pub config: Config,
    pub store: InventoryStore,
    pub inventory: Inventory,
}

impl Session {
    /// Load the inventory from `store`, starting empty if it is unreadable.
    pub fn open(config: Config, store: InventoryStore) -> Self {
        let inventory = store.load_or_empty();
        Self {
            config,
            store,
            inventory,
        }
    }

    /// Command-line path, else the configured last searched path, else ".".
    pub fn target_path(&self, path: Option<PathBuf>) -> PathBuf {
        path.or_else(|| self.config.query.last_searched_path.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Scan `root` and replace its inventory entry, then persist the
    /// inventory. Returns the inventory key.
    ///
    /// On any scan error, cancellation included, neither the inventory nor
    /// the saved document is touched.
    pub fn rescan(&self, root: &Path, options: &ScanOptions) -> Result<String> {
        let key = root_key(root);
        let projects = scan_root(root, options)?;
        tracing::debug!(root = %key, projects = projects.len(), "Replacing inventory entry");

        self.inventory.put(key.clone(), projects);
        self.store.save(&self.inventory)?;
        Ok(key)
    }

    /// Command-line sort options layered over the configured defaults.
    pub fn sort_spec(&self, args: &SortArgs) -> SortSpec {
        let default = self.config.default_sort();
        SortSpec::new(
            args.sort.unwrap_or(default.field),
            args.order.unwrap_or(default.direction),
        )
    }
}

/// Inventory key for `path`: its canonical form when it still exists.
pub fn root_key(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Print projects as an aligned table followed by a total line.
pub fn print_projects_table(projects: &[Project]) {
    println!("\n  {:<28} {:>10}  {:<28} {}", "NAME", "SIZE", "ARTIFACTS", "PATH");
    println!("  {}", "─".repeat(90));

    for project in projects {
        let kinds: Vec<&str> = project
            .artifacts()
            .iter()
            .map(|a| a.kind.dir_name())
            .collect();

        println!(
            "  {:<28} {:>10}  {:<28} {}",
            truncate(project.name(), 28),
            format_size(project.total_artifact_bytes()),
            truncate(&kinds.join(", "), 28),
            project.path(),
        );
    }

    let total: u64 = projects.iter().map(|p| p.total_artifact_bytes()).sum();
    let reclaimable: u64 = projects.iter().map(|p| p.reclaimable_bytes()).sum();
    println!(
        "\nTotal: {} in {} project{} ({} reclaimable)",
        format_size(total),
        projects.len(),
        if projects.len() == 1 { "" } else { "s" },
        format_size(reclaimable),
    );
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SortArgs;
    use crate::error::SweeperError;
    use crate::inventory::{SortDirection, SortField};
    use crate::scanner::CancelToken;
    use tempfile::TempDir;

    fn session(config: Config) -> (TempDir, Session) {
        let tmp = TempDir::new().unwrap();
        let store = InventoryStore::new(tmp.path().join("projects.json"));
        let session = Session::open(config, store);
        (tmp, session)
    }

    #[test]
    fn test_target_path_precedence() {
        let mut config = Config::default();
        let (_tmp, plain) = session(config.clone());
        assert_eq!(plain.target_path(None), PathBuf::from("."));

        config.query.last_searched_path = Some(PathBuf::from("/last"));
        let (_tmp, remembered) = session(config);
        assert_eq!(remembered.target_path(None), PathBuf::from("/last"));
        assert_eq!(
            remembered.target_path(Some(PathBuf::from("/given"))),
            PathBuf::from("/given")
        );
    }

    #[test]
    fn test_sort_spec_overrides_config() {
        let mut config = Config::default();
        config.query.sort_type = SortField::Size;
        config.query.sort_direction = SortDirection::Descending;
        let (_tmp, session) = session(config);

        let defaults = SortArgs {
            sort: None,
            order: None,
        };
        assert_eq!(
            session.sort_spec(&defaults),
            SortSpec::new(SortField::Size, SortDirection::Descending)
        );

        let overridden = SortArgs {
            sort: Some(SortField::Name),
            order: None,
        };
        assert_eq!(
            session.sort_spec(&overridden),
            SortSpec::new(SortField::Name, SortDirection::Descending)
        );
    }

    #[test]
    fn test_root_key_canonicalizes_existing_paths() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a");
        std::fs::create_dir(&nested).unwrap();

        let key = root_key(&nested.join("..").join("a"));
        assert_eq!(key, nested.canonicalize().unwrap().display().to_string());

        assert_eq!(root_key(Path::new("/no/such/root")), "/no/such/root");
    }

    #[test]
    fn test_rescan_replaces_and_persists() {
        let (tmp, session) = session(Config::default());
        let code = tmp.path().join("code");
        std::fs::create_dir_all(code.join("app/target")).unwrap();
        std::fs::write(code.join("app/target/bin"), vec![0u8; 64]).unwrap();

        let key = session.rescan(&code, &ScanOptions::default()).unwrap();

        assert_eq!(key, root_key(&code));
        let projects = session.inventory.get(&key);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].total_artifact_bytes(), 64);
        assert_eq!(session.store.load().unwrap(), session.inventory);
    }

    #[test]
    fn test_cancelled_rescan_leaves_inventory_untouched() {
        let (tmp, session) = session(Config::default());
        let code = tmp.path().join("code");
        std::fs::create_dir_all(code.join("app/node_modules")).unwrap();
        std::fs::write(code.join("app/node_modules/dep.js"), vec![0u8; 32]).unwrap();

        let key = session.rescan(&code, &ScanOptions::default()).unwrap();
        let before = session.inventory.get(&key);
        let saved = std::fs::read(session.store.path()).unwrap();

        // Grow the tree so a completed rescan would change the entry
        std::fs::create_dir_all(code.join("lib/target")).unwrap();
        std::fs::write(code.join("lib/target/out"), vec![0u8; 16]).unwrap();

        let cancel = CancelToken::new();
        cancel.cancel();
        let options = ScanOptions::new().with_cancel(cancel);

        let result = session.rescan(&code, &options);
        assert!(matches!(result, Err(SweeperError::Cancelled)));
        assert_eq!(session.inventory.get(&key), before);
        assert_eq!(std::fs::read(session.store.path()).unwrap(), saved);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-project-name", 10), "a-very-...");
    }
}
