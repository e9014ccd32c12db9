//! ChainProbe port - read-only existence check for contract code

use alloy::primitives::Address;
use thiserror::Error;

use crate::domain::value_objects::NetworkIdentity;

/// Reasons a probe could not answer.
///
/// These never mean "no code"; callers decide what a failed probe implies.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("no RPC endpoint configured for network '{network}'")]
    NoEndpoint { network: String },

    #[error("invalid RPC endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    #[error("RPC request to {url} failed: {message}")]
    Rpc { url: String, message: String },
}

/// Queries whether executable code exists at an address.
pub trait ChainProbe {
    /// `Ok(false)` for an absent address, without touching the network.
    /// Otherwise `Ok(true)` iff the network reports non-empty code.
    fn has_contract_code(
        &self,
        network: &NetworkIdentity,
        address: Option<&Address>,
    ) -> Result<bool, ProbeError>;
}
