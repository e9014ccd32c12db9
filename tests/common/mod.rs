//! Common test utilities for factory-check CLI tests.
//!
//! Provides `TestEnv`: an isolated working directory holding a config
//! artifact directory and an optional tool config, plus helpers to run the
//! binary with a scrubbed environment.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

pub const DEPLOYED: &str = "0x787B8840100d9BaAdD7463f4a73b5BA73B00C6cA";

/// Variables the binary reads, cleared for every run.
const SCRUBBED_VARS: &[&str] = &[
    "VITE_APP_ENV",
    "RUST_LOG",
    "FACTORY_CHECK_CONFIG_DIR",
    "FACTORY_CHECK_RPC_URL",
    "FACTORY_CHECK_PROBE_FAILURE",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl TestResult {
    pub fn json(&self) -> serde_json::Value {
        let line = self
            .stdout
            .lines()
            .rfind(|l| !l.trim().is_empty())
            .unwrap_or_else(|| panic!("no stdout; stderr:\n{}", self.stderr));
        serde_json::from_str(line).unwrap()
    }
}

/// Isolated working directory for one CLI scenario
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("config")).unwrap();
        Self { root }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write an artifact `config/<file>` for a network, with an optional address.
    pub fn write_artifact(&self, file: &str, network: &str, urls: &[&str], address: Option<&str>) {
        let address = address.map_or("null".to_string(), |a| format!("\"{}\"", a));
        let urls = urls
            .iter()
            .map(|u| format!("\"{}\"", u))
            .collect::<Vec<_>>()
            .join(", ");
        let content = format!(
            "import {{ AppConfig }} from \".\";\n\nconst config: AppConfig = {{\n  \"network\": {{\n    \"name\": \"{network}\",\n    \"urls\": [{urls}]\n  }},\n  \"simpleAccountFactoryContractAddress\": {address},\n  \"nodeUrl\": \"https://node.example.org\"\n}};\n\nexport default config;\n"
        );
        std::fs::write(self.path("config").join(file), content).unwrap();
    }

    pub fn read_artifact(&self, file: &str) -> String {
        std::fs::read_to_string(self.path("config").join(file)).unwrap()
    }

    /// Write `factory-check.toml` in the working directory.
    pub fn write_tool_config(&self, content: &str) {
        std::fs::write(self.path("factory-check.toml"), content).unwrap();
    }

    pub fn run(&self, args: &[&str], envs: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_factory-check"));
        cmd.current_dir(self.root.path())
            .args(["--config-dir", "config"])
            .args(args);
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd.output().unwrap().into()
    }
}

pub fn assert_success(result: &TestResult) {
    assert!(
        result.success,
        "expected success, got exit {}\nstdout:\n{}\nstderr:\n{}",
        result.exit_code, result.stdout, result.stderr
    );
}

pub fn assert_failure(result: &TestResult) {
    assert_eq!(
        result.exit_code, 1,
        "expected exit 1\nstdout:\n{}\nstderr:\n{}",
        result.stdout, result.stderr
    );
}
