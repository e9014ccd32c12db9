//! Deployment Policy
//!
//! Decides whether a missing contract may be deployed automatically.
//! This is a pure policy: no I/O, no state.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::NetworkClass;

/// Why a run ended without deploying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Code already exists at the configured address
    AlreadyDeployed,
    /// The network does not allow automatic deployment
    RestrictedNetwork,
    /// The probe failed and the run was configured to skip on probe failure
    ProbeFailed(String),
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::AlreadyDeployed => "already deployed",
            SkipReason::RestrictedNetwork => "restricted network",
            SkipReason::ProbeFailed(_) => "probe failed",
        }
    }
}

/// Outcome of the deployment policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip(SkipReason),
    Deploy,
}

/// Apply the deployment policy.
///
/// Present code always wins; otherwise only permissive networks deploy.
pub fn decide(class: &NetworkClass, code_present: bool) -> Decision {
    if code_present {
        Decision::Skip(SkipReason::AlreadyDeployed)
    } else if class.is_permissive() {
        Decision::Deploy
    } else {
        Decision::Skip(SkipReason::RestrictedNetwork)
    }
}

/// What to do when the chain probe itself fails.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ProbeFailurePolicy {
    /// Surface the failure as an error (non-zero exit)
    #[default]
    Escalate,
    /// End the run as a skip, reported separately from policy skips
    Skip,
}

impl ProbeFailurePolicy {
    pub const VALID_VALUES: [&'static str; 2] = ["escalate", "skip"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "escalate" => Some(ProbeFailurePolicy::Escalate),
            "skip" => Some(ProbeFailurePolicy::Skip),
            _ => None,
        }
    }
}
