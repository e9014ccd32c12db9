//! Artifact-backed configuration provider
//!
//! Loads `AppConfig` from the same TypeScript modules the check rewrites, so a
//! run always sees what the previous run recorded.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{AppConfig, ContractsConfig};
use crate::domain::ports::{ConfigProvider, FileSystem};
use crate::domain::value_objects::Environment;
use crate::error::{CheckError, CheckResult};
use crate::infrastructure::artifact::parse_artifact;

/// Reads environment configs from artifacts and contract configs from JSON.
pub struct ArtifactConfigProvider<FS: FileSystem> {
    fs: FS,
    config_dir: PathBuf,
    environments: BTreeMap<String, PathBuf>,
    contracts_dir: PathBuf,
}

impl<FS: FileSystem> ArtifactConfigProvider<FS> {
    pub fn new(
        fs: FS,
        config_dir: impl Into<PathBuf>,
        environments: BTreeMap<String, PathBuf>,
        contracts_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            config_dir: config_dir.into(),
            environments,
            contracts_dir: contracts_dir.into(),
        }
    }

    fn artifact_path(&self, environment: &Environment) -> CheckResult<PathBuf> {
        self.environments
            .get(environment.as_str())
            .map(|file| self.config_dir.join(file))
            .ok_or_else(|| CheckError::ConfigLoad {
                path: self.config_dir.clone(),
                message: format!("no config artifact mapped for environment '{}'", environment),
            })
    }

    fn read(&self, path: &Path) -> CheckResult<String> {
        self.fs.read(path).map_err(|e| CheckError::ConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl<FS: FileSystem> ConfigProvider for ArtifactConfigProvider<FS> {
    fn app_config(&self, environment: &Environment) -> CheckResult<AppConfig> {
        let path = self.artifact_path(environment)?;
        debug!("Loading {} config from {}", environment, path.display());
        let text = self.read(&path)?;
        parse_artifact(&text).map_err(|message| CheckError::ConfigLoad { path, message })
    }

    fn contracts_config(&self, environment: &Environment) -> CheckResult<ContractsConfig> {
        let path = self.contracts_dir.join(format!("{}.json", environment));
        if !self.fs.exists(&path) {
            debug!("No contracts config at {}", path.display());
            return Ok(ContractsConfig::default());
        }
        let text = self.read(&path)?;
        serde_json::from_str(&text).map_err(|e| CheckError::ConfigLoad {
            path,
            message: e.to_string(),
        })
    }
}
