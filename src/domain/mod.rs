//! Domain Layer
//!
//! The deployment check's business logic, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - AppConfig, ContractsConfig, DeployedAddress, DeploymentResult
//! - `value_objects/` - Environment, NetworkClass, ContractRole, ArtifactTable
//! - `policies/` - DeploymentPolicy, ProbeFailurePolicy
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Policies are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
