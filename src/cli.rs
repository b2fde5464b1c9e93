use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::inventory::{SortDirection, SortField};

/// Build Sweeper - find and size reclaimable build-artifact directories
#[derive(Parser, Debug)]
#[command(name = "build-sweeper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "BUILD_SWEEPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the inventory cache file
    #[arg(long, global = true, value_name = "PATH", env = "BUILD_SWEEPER_CACHE")]
    pub cache: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a folder for build artifacts and cache the results
    Scan(ScanArgs),

    /// Show cached results without rescanning
    List(ListArgs),

    /// List cached scan roots
    Roots,

    /// Remove a scan root from the cache
    Forget(ForgetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Sort by: name, size
    #[arg(long, value_name = "BY")]
    pub sort: Option<SortField>,

    /// Sort direction: asc, desc
    #[arg(long, value_name = "DIR")]
    pub order: Option<SortDirection>,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Folder to scan (defaults to the last searched path, then ".")
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub sort: SortArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Threads used to size artifacts
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Maximum recursion depth
    #[arg(short = 'd', long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_depth: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Scan root to show (defaults to the last searched path, then ".")
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub sort: SortArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ForgetArgs {
    /// Scan root to remove
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
