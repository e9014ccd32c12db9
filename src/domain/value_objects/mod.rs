//! Value Objects
//!
//! Immutable types identified by their value rather than identity.

mod artifact_table;
mod contract;
mod environment;
mod network;

pub use artifact_table::ArtifactTable;
pub use contract::{is_address_field, parse_address, ContractRole};
pub use environment::Environment;
pub use network::{NetworkClass, NetworkIdentity};
