//! Scan command implementation

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

use crate::cli::ScanArgs;
use crate::error::SweeperError;
use crate::inventory::query;
use crate::scanner::{CancelToken, ScanOptions};
use crate::signals;

use super::{print_projects_table, root_key, Session};

/// Run the scan command
pub fn run(args: ScanArgs, session: &Session, quiet: bool) -> Result<()> {
    let path = session.target_path(args.path);
    if !path.is_dir() {
        return Err(SweeperError::InvalidRoot(path).into());
    }
    let key = root_key(&path);

    let cancel = CancelToken::new();
    if let Err(err) = signals::install_cancel_handler(&cancel) {
        tracing::warn!(error = %err, "Could not install cancel handler");
    }

    let mut options = ScanOptions::new()
        .with_threads(args.jobs.unwrap_or(session.config.scanner.threads))
        .with_cancel(cancel);
    if let Some(depth) = args.max_depth.or(session.config.scanner.max_depth) {
        options = options.with_max_depth(depth);
    }

    let spinner = spinner(quiet || args.json, &key);
    let started = Instant::now();

    let result = session.rescan(&path, &options);
    spinner.finish_and_clear();
    let key = match result {
        Ok(key) => key,
        Err(err) => {
            if matches!(err, SweeperError::Cancelled) {
                tracing::info!(root = %key, "Scan cancelled, cache left unchanged");
            }
            return Err(err.into());
        }
    };

    tracing::info!(
        root = %key,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Scan finished"
    );

    let view = query(&session.inventory, &key, session.sort_spec(&args.sort));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if view.is_empty() {
        println!("No build artifacts found under {}.", key);
    } else {
        print_projects_table(&view);
    }

    Ok(())
}

fn spinner(hidden: bool, root: &str) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(format!("Scanning {}...", root));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
