//! Cache maintenance commands: listing roots and forgetting one.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, ForgetArgs};
use crate::scanner::format_size;

use super::{root_key, Session};

/// Print every cached scan root with its project count and total size.
pub fn roots(session: &Session) -> Result<()> {
    let roots = session.inventory.roots();
    if roots.is_empty() {
        println!("Cache is empty ({}).", session.store.path().display());
        return Ok(());
    }

    for root in roots {
        let projects = session.inventory.get(&root);
        let total: u64 = projects.iter().map(|p| p.total_artifact_bytes()).sum();
        println!(
            "{:>10}  {:>4} project{}  {}",
            format_size(total),
            projects.len(),
            if projects.len() == 1 { " " } else { "s" },
            root
        );
    }

    Ok(())
}

/// Remove one root from the cache and persist the change.
pub fn forget(args: ForgetArgs, session: &Session) -> Result<()> {
    let key = root_key(&args.path);

    if session.inventory.remove(&key) {
        session.store.save(&session.inventory)?;
        println!("Removed {} from the cache.", key);
    } else {
        println!("{} is not cached.", key);
    }

    Ok(())
}

/// Write shell completions to stdout.
pub fn completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}
