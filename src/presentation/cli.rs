//! CLI Argument Parsing
//!
//! Flags override the tool config file and `FACTORY_CHECK_*` variables.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::policies::ProbeFailurePolicy;

/// factory-check - ensure the account-factory contract is deployed
#[derive(Parser, Debug)]
#[command(name = "factory-check")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "The environment is read from VITE_APP_ENV unless --env is given.\nExit status is 0 when the contract is deployed or the run is skipped, 1 on failure."
)]
pub struct Cli {
    /// Tool config file (defaults to ./factory-check.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Environment name, instead of reading the selector variable
    #[arg(short, long, value_name = "NAME")]
    pub env: Option<String>,

    /// Directory holding the per-network config artifacts
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// What to do when contract code cannot be probed
    #[arg(long, value_enum)]
    pub probe_failure: Option<ProbeFailurePolicy>,

    /// Probe and decide, but never deploy or write
    #[arg(long)]
    pub dry_run: bool,

    /// Print the outcome as a single JSON object
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
