//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the check use case with infrastructure dependencies
//! - Output formatting (text/JSON)

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
pub use factory::{create_check_options, create_check_use_case, resolve_environment};
pub use output::{render, OutputFormat};
