//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local)
//! - `artifact/` - TypeScript config artifact codec and writer
//! - `config/` - Artifact-backed ConfigProvider
//! - `chain/` - JSON-RPC ChainProbe
//! - `deploy/` - External-command Deployer

pub mod artifact;
pub mod chain;
pub mod config;
pub mod deploy;
pub mod fs;

// Re-export for convenience
pub use artifact::TsModuleWriter;
pub use chain::RpcChainProbe;
pub use config::ArtifactConfigProvider;
pub use deploy::CommandDeployer;
pub use fs::LocalFs;
