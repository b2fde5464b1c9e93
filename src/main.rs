use anyhow::{Context, Result};
use clap::Parser;

use build_sweeper::cli::{Cli, Command};
use build_sweeper::commands::{self, Session};
use build_sweeper::config::Config;
use build_sweeper::inventory::InventoryStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    if let Command::Completions(args) = &cli.command {
        commands::cache::completions(args.shell);
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "Loaded configuration");

    let cache_path = cli
        .cache
        .clone()
        .or_else(|| config.cache.path.clone())
        .or_else(InventoryStore::default_path)
        .context("No cache directory available; pass --cache")?;
    let session = Session::open(config, InventoryStore::new(cache_path));

    // Dispatch to subcommand
    match cli.command {
        Command::Scan(args) => {
            tracing::info!(?args, "Starting scan");
            commands::scan::run(args, &session, cli.quiet)?;
        }
        Command::List(args) => {
            commands::list::run(args, &session)?;
        }
        Command::Roots => {
            commands::cache::roots(&session)?;
        }
        Command::Forget(args) => {
            commands::cache::forget(args, &session)?;
        }
        Command::Completions(_) => {}
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("build_sweeper={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
