//! List command implementation

use anyhow::Result;

use crate::cli::ListArgs;
use crate::inventory::query;

use super::{print_projects_table, root_key, Session};

/// Show cached results for a root without touching the filesystem tree.
pub fn run(args: ListArgs, session: &Session) -> Result<()> {
    let key = root_key(&session.target_path(args.path));
    let view = query(&session.inventory, &key, session.sort_spec(&args.sort));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if !session.inventory.contains(&key) {
        println!(
            "No cached results for {}. Run `build-sweeper scan {}` first.",
            key, key
        );
    } else if view.is_empty() {
        println!("No build artifacts found under {}.", key);
    } else {
        print_projects_table(&view);
    }

    Ok(())
}
