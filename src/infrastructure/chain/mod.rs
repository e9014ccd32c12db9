//! On-chain code probes.

mod rpc_probe;

pub use rpc_probe::RpcChainProbe;
