//! Deployer implementations.

mod command;

pub use command::{parse_report, CommandDeployer, DEFAULT_ARGS, DEFAULT_PROGRAM, ENV_VAR};
