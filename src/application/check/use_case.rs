//! Check Use Case
//!
//! Orchestrates the deployment check:
//! 1. Resolve the environment and load its AppConfig
//! 2. Resolve the artifact path when the network class permits deployment
//! 3. Probe the tracked contract's address
//! 4. Apply the deployment policy
//! 5. Deploy once and rewrite the artifact, or stop with a skip
//!
//! This use case is pure orchestration - the decision itself lives in
//! `domain::policies`.

use tracing::{debug, info, warn};

use crate::domain::policies::{decide, Decision, ProbeFailurePolicy, SkipReason};
use crate::domain::ports::{ChainProbe, ConfigProvider, ConfigWriter, Deployer};
use crate::error::{CheckError, CheckResult};

use super::options::CheckOptions;
use super::outcome::CheckOutcome;

/// Check use case - the single coordinating authority of a run
///
/// Parameterized by its ports so tests can inject mocks for every side effect.
pub struct CheckUseCase<CP, PR, DE, CW>
where
    CP: ConfigProvider,
    PR: ChainProbe,
    DE: Deployer,
    CW: ConfigWriter,
{
    config_provider: CP,
    probe: PR,
    deployer: DE,
    writer: CW,
}

impl<CP, PR, DE, CW> CheckUseCase<CP, PR, DE, CW>
where
    CP: ConfigProvider,
    PR: ChainProbe,
    DE: Deployer,
    CW: ConfigWriter,
{
    pub fn new(config_provider: CP, probe: PR, deployer: DE, writer: CW) -> Self {
        Self {
            config_provider,
            probe,
            deployer,
            writer,
        }
    }

    /// Execute one check run.
    ///
    /// Skips are successful outcomes; every failure is returned as an error
    /// and nothing after the failing step runs.
    pub fn execute(&self, options: &CheckOptions) -> CheckResult<CheckOutcome> {
        let environment =
            options
                .environment
                .as_ref()
                .ok_or_else(|| CheckError::MissingEnvironment {
                    var: options.env_var.clone(),
                })?;

        let config = self.config_provider.app_config(environment)?;
        let network = config.network();
        let class = network.class();
        // Only classes that can deploy need an artifact; resolve theirs
        // before any network traffic.
        let artifact = if class.is_permissive() {
            Some(self.writer.target_path(&class)?)
        } else {
            None
        };

        info!(
            "Checking contracts deployment on {} ({})...",
            network.name,
            network.primary_url().unwrap_or("no RPC endpoint")
        );

        let address = config.contract_address(&options.tracked);
        let code_present = match self.probe.has_contract_code(network, address.as_ref()) {
            Ok(present) => present,
            Err(err) => match options.probe_failure {
                ProbeFailurePolicy::Escalate => return Err(err.into()),
                ProbeFailurePolicy::Skip => {
                    warn!("Could not probe {}: {}", options.tracked, err);
                    return Ok(CheckOutcome::Skipped {
                        network: network.name.clone(),
                        reason: SkipReason::ProbeFailed(err.to_string()),
                        address,
                    });
                }
            },
        };

        if !code_present {
            match address {
                Some(address) => info!("{} not deployed at address {}", options.tracked, address),
                None => info!("{} has no configured address", options.tracked),
            }
        }

        match decide(&class, code_present) {
            Decision::Skip(reason) => {
                let outcome = CheckOutcome::Skipped {
                    network: network.name.clone(),
                    reason,
                    address,
                };
                info!("{}", outcome.message());
                Ok(outcome)
            }
            Decision::Deploy if options.dry_run => {
                let artifact = artifact.map_or_else(|| self.writer.target_path(&class), Ok)?;
                info!("Dry run: skipping deployment of {}", options.tracked);
                Ok(CheckOutcome::WouldDeploy {
                    network: network.name.clone(),
                    artifact,
                })
            }
            Decision::Deploy => {
                let artifact = artifact.map_or_else(|| self.writer.target_path(&class), Ok)?;
                let contracts = self.config_provider.contracts_config(environment)?;
                if contracts.is_empty() {
                    debug!("No contracts config for {}, deploying with defaults", environment);
                }
                let result = self.deployer.deploy_all(environment, &contracts)?;
                let deployed = result.address_for(&options.tracked)?;

                let updated = config.with_contract_address(&options.tracked, &deployed);
                info!("Writing new config file to {}", artifact.display());
                let written = self.writer.write(&class, &updated)?;

                Ok(CheckOutcome::Deployed {
                    network: network.name.clone(),
                    address: deployed,
                    artifact: written,
                })
            }
        }
    }
}
