//! Check Outcome
//!
//! Terminal states of a successful run. Failures are `CheckError`s.

use std::path::PathBuf;

use alloy::primitives::Address;

use crate::domain::entities::DeployedAddress;
use crate::domain::policies::SkipReason;

/// How a check run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The contract was deployed and the artifact rewritten
    Deployed {
        network: String,
        address: DeployedAddress,
        artifact: PathBuf,
    },
    /// Dry run: a deployment would have happened
    WouldDeploy { network: String, artifact: PathBuf },
    /// Nothing was deployed or written
    Skipped {
        network: String,
        reason: SkipReason,
        address: Option<Address>,
    },
}

impl CheckOutcome {
    /// Short machine-friendly status
    pub fn status(&self) -> &'static str {
        match self {
            CheckOutcome::Deployed { .. } => "deployed",
            CheckOutcome::WouldDeploy { .. } => "would-deploy",
            CheckOutcome::Skipped { .. } => "skipped",
        }
    }

    /// Human-readable summary line
    pub fn message(&self) -> String {
        match self {
            CheckOutcome::Deployed {
                network,
                address,
                artifact,
            } => format!(
                "Deployed contract on {} at {}, config written to {}",
                network,
                address,
                artifact.display()
            ),
            CheckOutcome::WouldDeploy { network, artifact } => format!(
                "Dry run: would deploy on {} and rewrite {}",
                network,
                artifact.display()
            ),
            CheckOutcome::Skipped {
                network, reason, ..
            } => match reason {
                SkipReason::AlreadyDeployed => {
                    "Contract already deployed, skipping deployment...".to_string()
                }
                SkipReason::RestrictedNetwork => format!(
                    "Skipping deployment on {}. Not solo or testnet.",
                    network
                ),
                SkipReason::ProbeFailed(message) => format!(
                    "Skipping deployment on {}: could not probe contract code ({})",
                    network, message
                ),
            },
        }
    }

    /// Single JSON event for `--json` output
    pub fn to_json(&self) -> serde_json::Value {
        let mut event = serde_json::json!({
            "event": "check",
            "status": self.status(),
            "message": self.message(),
        });
        match self {
            CheckOutcome::Deployed {
                network,
                address,
                artifact,
            } => {
                event["network"] = network.clone().into();
                event["address"] = address.to_string().into();
                event["artifact"] = artifact.display().to_string().into();
            }
            CheckOutcome::WouldDeploy { network, artifact } => {
                event["network"] = network.clone().into();
                event["artifact"] = artifact.display().to_string().into();
            }
            CheckOutcome::Skipped {
                network,
                reason,
                address,
            } => {
                event["network"] = network.clone().into();
                event["reason"] = reason.as_str().into();
                if let Some(address) = address {
                    event["address"] = address.to_string().into();
                }
            }
        }
        event
    }
}
