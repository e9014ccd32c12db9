//! Error types for factory-check
//!
//! Library code returns `CheckError`; only the binary turns it into an exit status.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ProbeError;

/// Result type alias for factory-check operations
pub type CheckResult<T> = Result<T, CheckError>;

/// Main error type for the deployment check
#[derive(Error, Debug)]
pub enum CheckError {
    /// The environment selector variable is not set
    #[error("{var} env variable must be set")]
    MissingEnvironment { var: String },

    /// No config artifact is mapped for the active network class
    #[error("no config artifact mapped for network class '{class}'")]
    UnknownNetworkClass { class: String },

    /// Querying on-chain code failed
    #[error("contract code probe failed: {0}")]
    Probe(#[from] ProbeError),

    /// The deployment collaborator failed or returned an unusable result
    #[error("deployment failed: {message}")]
    Deployment { message: String },

    /// Writing the updated config artifact failed
    #[error("failed to write config artifact {path}: {message}")]
    ConfigWrite { path: PathBuf, message: String },

    /// Reading or parsing a configuration source failed
    #[error("failed to load config from {path}: {message}")]
    ConfigLoad { path: PathBuf, message: String },

    /// Tool configuration is structurally invalid
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A contract address field holds something other than a 20-byte hex address
    #[error("invalid contract address '{value}' in field '{field}'")]
    InvalidAddress { field: String, value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
