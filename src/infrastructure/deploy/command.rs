//! External deployment command
//!
//! Runs the project's deploy script as a subprocess. The contracts config is
//! sent as JSON on stdin; the script reports deployed addresses as a JSON
//! object on the last non-empty line of stdout.

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, warn};

use crate::domain::entities::{ContractsConfig, DeploymentResult};
use crate::domain::ports::Deployer;
use crate::domain::value_objects::Environment;
use crate::error::{CheckError, CheckResult};

/// Environment variable carrying the active environment name to the script.
pub const ENV_VAR: &str = "FACTORY_CHECK_ENV";

pub const DEFAULT_PROGRAM: &str = "npx";
pub const DEFAULT_ARGS: &[&str] = &["hardhat", "run", "scripts/deploy.ts"];

#[derive(Debug, Clone)]
pub struct CommandDeployer {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl Default for CommandDeployer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_ARGS.iter().map(|a| a.to_string()))
    }
}

impl CommandDeployer {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = String>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().collect(),
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Deployer for CommandDeployer {
    fn deploy_all(
        &self,
        environment: &Environment,
        contracts: &ContractsConfig,
    ) -> CheckResult<DeploymentResult> {
        let payload = serde_json::to_vec(contracts).map_err(|e| CheckError::Deployment {
            message: format!("cannot encode contracts config: {}", e),
        })?;

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .env(ENV_VAR, environment.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        debug!("Running '{}'", self.command_line());
        let mut child = cmd.spawn().map_err(|e| CheckError::Deployment {
            message: format!("cannot run '{}': {}", self.command_line(), e),
        })?;

        // Stdin is fed from its own thread while stdout and stderr drain, so
        // a script may print before it reads its input.
        let feeder = child
            .stdin
            .take()
            .map(|mut stdin| thread::spawn(move || stdin.write_all(&payload)));

        let output = child.wait_with_output();

        if let Some(feeder) = feeder {
            match feeder.join() {
                Ok(Ok(())) => {}
                // Scripts that ignore their input may exit before reading it.
                Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {}
                Ok(Err(e)) => {
                    return Err(CheckError::Deployment {
                        message: format!("cannot send contracts config: {}", e),
                    })
                }
                Err(_) => {
                    return Err(CheckError::Deployment {
                        message: "contracts config writer panicked".to_string(),
                    })
                }
            }
        }

        let output = output.map_err(|e| CheckError::Deployment {
            message: format!("'{}' did not complete: {}", self.command_line(), e),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(CheckError::Deployment {
                message: format!(
                    "'{}' exited with {}: {}",
                    self.command_line(),
                    output.status,
                    stderr.trim()
                ),
            });
        }
        if !stderr.trim().is_empty() {
            warn!("Deploy script stderr: {}", stderr.trim());
        }

        parse_report(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse the deploy script's report from its stdout.
pub fn parse_report(stdout: &str) -> CheckResult<DeploymentResult> {
    let last = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .ok_or_else(|| CheckError::Deployment {
            message: "deploy script produced no output".to_string(),
        })?;

    serde_json::from_str(last).map_err(|e| CheckError::Deployment {
        message: format!("deploy script output is not a JSON object ({}): {}", e, last),
    })
}
