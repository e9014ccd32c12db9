//! Use Case Factory
//!
//! Creates the check use case with infrastructure dependencies wired up
//! from a resolved tool config.

use crate::application::check::{CheckOptions, CheckUseCase};
use crate::config::Config;
use crate::domain::value_objects::Environment;
use crate::error::{CheckError, CheckResult};
use crate::infrastructure::{
    ArtifactConfigProvider, CommandDeployer, LocalFs, RpcChainProbe, TsModuleWriter,
};

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<
    ArtifactConfigProvider<LocalFs>,
    RpcChainProbe,
    CommandDeployer,
    TsModuleWriter<LocalFs>,
>;

/// Create a check use case with all dependencies wired up
pub fn create_check_use_case(config: &Config) -> CheckResult<ConcreteCheckUseCase> {
    let table = config.artifact_table()?;

    let provider = ArtifactConfigProvider::new(
        LocalFs::new(),
        &config.artifacts.config_dir,
        config.artifacts.environments.clone(),
        &config.deployer.contracts_dir,
    );
    let probe = RpcChainProbe::new(config.rpc.url.clone())?;

    let mut deployer = CommandDeployer::new(
        config.deployer.program.clone(),
        config.deployer.args.iter().cloned(),
    );
    if let Some(dir) = &config.deployer.working_dir {
        deployer = deployer.with_working_dir(dir);
    }

    let writer = TsModuleWriter::new(LocalFs::new(), &config.artifacts.config_dir, table);

    Ok(CheckUseCase::new(provider, probe, deployer, writer))
}

/// Resolve the environment selector named by the config.
///
/// An explicit `--env` wins over the variable. Missing or blank is an error.
pub fn resolve_environment<F>(
    explicit: Option<&str>,
    config: &Config,
    lookup: F,
) -> CheckResult<Environment>
where
    F: Fn(&str) -> Option<String>,
{
    Environment::resolve(explicit, &config.check.env_var, lookup).ok_or_else(|| {
        CheckError::MissingEnvironment {
            var: config.check.env_var.clone(),
        }
    })
}

/// Build run options from config and a resolved environment.
pub fn create_check_options(
    config: &Config,
    environment: Environment,
    dry_run: bool,
) -> CheckOptions {
    CheckOptions::new(Some(environment))
        .with_env_var(config.check.env_var.clone())
        .with_tracked(config.tracked_role())
        .with_probe_failure(config.check.probe_failure)
        .with_dry_run(dry_run)
}
