//! TypeScript module writer
//!
//! Implements the ConfigWriter port: resolves the network class through the
//! artifact table and overwrites the whole module.

use std::path::PathBuf;

use crate::domain::entities::AppConfig;
use crate::domain::ports::{ConfigWriter, FileSystem};
use crate::domain::value_objects::{ArtifactTable, NetworkClass};
use crate::error::{CheckError, CheckResult};

use super::codec::render_artifact;

/// Writes `AppConfig` artifacts under a config directory.
pub struct TsModuleWriter<FS: FileSystem> {
    fs: FS,
    config_dir: PathBuf,
    table: ArtifactTable,
}

impl<FS: FileSystem> TsModuleWriter<FS> {
    pub fn new(fs: FS, config_dir: impl Into<PathBuf>, table: ArtifactTable) -> Self {
        Self {
            fs,
            config_dir: config_dir.into(),
            table,
        }
    }
}

impl<FS: FileSystem> ConfigWriter for TsModuleWriter<FS> {
    fn target_path(&self, class: &NetworkClass) -> CheckResult<PathBuf> {
        Ok(self.config_dir.join(self.table.resolve(class)?))
    }

    fn write(&self, class: &NetworkClass, config: &AppConfig) -> CheckResult<PathBuf> {
        let path = self.target_path(class)?;
        let content = render_artifact(config).map_err(|e| CheckError::ConfigWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        self.fs
            .write(&path, &content)
            .map_err(|e| CheckError::ConfigWrite {
                path: path.clone(),
                message: e.to_string(),
            })?;
        Ok(path)
    }
}
