//! Check Options
//!
//! Per-run settings for the deployment check.

use crate::domain::policies::ProbeFailurePolicy;
use crate::domain::value_objects::{ContractRole, Environment};

/// Options for the check use case
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Active environment; `None` when the selector was not provided
    pub environment: Option<Environment>,
    /// Name of the selector variable, for error messages
    pub env_var: String,
    /// Contract whose presence is checked
    pub tracked: ContractRole,
    /// Behaviour when the chain probe fails
    pub probe_failure: ProbeFailurePolicy,
    /// Probe and decide, but never deploy or write
    pub dry_run: bool,
}

impl CheckOptions {
    pub fn new(environment: Option<Environment>) -> Self {
        Self {
            environment,
            env_var: Environment::DEFAULT_VAR.to_string(),
            tracked: ContractRole::default(),
            probe_failure: ProbeFailurePolicy::default(),
            dry_run: false,
        }
    }

    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    pub fn with_tracked(mut self, tracked: ContractRole) -> Self {
        self.tracked = tracked;
        self
    }

    pub fn with_probe_failure(mut self, policy: ProbeFailurePolicy) -> Self {
        self.probe_failure = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
