//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod chain_probe;
pub mod config_provider;
pub mod config_writer;
pub mod deployer;
pub mod file_system;

pub use chain_probe::{ChainProbe, ProbeError};
pub use config_provider::ConfigProvider;
pub use config_writer::ConfigWriter;
pub use deployer::Deployer;
pub use file_system::{FileSystem, FsError, FsResult};
