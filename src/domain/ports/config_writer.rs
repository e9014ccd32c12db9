//! ConfigWriter port - persists an updated AppConfig as the network's artifact

use std::path::PathBuf;

use crate::domain::entities::AppConfig;
use crate::domain::value_objects::NetworkClass;
use crate::error::CheckResult;

/// Writes config artifacts, one file per network class.
pub trait ConfigWriter {
    /// Where the artifact for `class` lives.
    ///
    /// Fails with `UnknownNetworkClass` when the class has no mapping; the
    /// orchestrator calls this before probing so misconfiguration fails fast.
    fn target_path(&self, class: &NetworkClass) -> CheckResult<PathBuf>;

    /// Overwrite the artifact for `class` with `config`. Returns the path written.
    fn write(&self, class: &NetworkClass, config: &AppConfig) -> CheckResult<PathBuf>;
}
