//! Tool configuration
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FACTORY_CHECK_*)
//! 3. Config file (`--config`, or `factory-check.toml` in the working directory)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load, with_env_overrides, ConfigWarning, DEFAULT_CONFIG_FILE};
pub use types::{ArtifactsConfig, CheckConfig, Config, DeployerConfig, RpcConfig};
