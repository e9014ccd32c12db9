//! factory-check CLI - ensure the account-factory contract is deployed
//!
//! Usage: factory-check [OPTIONS]
//!
//! Probes the configured network for the tracked contract. On sandbox
//! networks a missing contract is deployed and the config artifact rewritten;
//! on any other network the run is skipped.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use factory_check::config;
use factory_check::presentation::{
    create_check_options, create_check_use_case, render, resolve_environment, Cli, OutputFormat,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let (mut config, warnings) =
        config::load(cli.config.as_deref()).context("loading tool configuration")?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    // The selector's variable name comes from the config; nothing else
    // runs until it is resolved.
    let environment =
        resolve_environment(cli.env.as_deref(), &config, |var| std::env::var(var).ok())?;

    if let Some(dir) = &cli.config_dir {
        config.artifacts.config_dir = dir.clone();
    }
    if let Some(policy) = cli.probe_failure {
        config.check.probe_failure = policy;
    }
    config.validate()?;

    let options = create_check_options(&config, environment, cli.dry_run);
    let use_case = create_check_use_case(&config)?;

    let outcome = use_case.execute(&options)?;

    let format = OutputFormat::from_flag(cli.json);
    let unicode = std::io::stdout().is_terminal();
    println!("{}", render(&outcome, format, unicode));
    Ok(())
}
