//! Common test utilities for bundle-overlay CLI tests.
//!
//! `TestEnv` is an isolated project in a temp directory with helpers to run
//! the binary against it. Environment variables that would leak a config
//! location from the outer shell are cleared for every run.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub root: TempDir,
}

const SCRUBBED_ENV: &[&str] = &[
    "ionic_webpack",
    "npm_config_ionic_webpack",
    "ionic_root_dir",
    "ionic_src_dir",
    "ionic_www_dir",
    "ionic_tmp_dir",
    "ionic_build_dir",
    "RUST_LOG",
];

impl TestEnv {
    /// Project with `src/app/main.ts` and no config file
    pub fn new() -> Self {
        let env = Self {
            root: tempfile::tempdir().unwrap(),
        };
        env.write("src/app/main.ts", "let greeting: string = \"hi\";\n");
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Write a transpiled manifest serving `output` for `src/app/main.ts`
    pub fn transpiled_manifest(&self, output: &str) -> PathBuf {
        let mut entries = serde_json::Map::new();
        entries.insert(
            self.path("src/app/main.ts").display().to_string(),
            serde_json::json!(output),
        );
        self.write(
            ".tmp/transpiled.json",
            &serde_json::Value::Object(entries).to_string(),
        )
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        run_in(self.root.path(), args, env_vars)
    }
}

/// Run the binary in `cwd` with a scrubbed environment
pub fn run_in(cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bundle-overlay"));
    cmd.current_dir(cwd).args(args);
    for name in SCRUBBED_ENV {
        cmd.env_remove(name);
    }
    for (name, value) in env_vars {
        cmd.env(name, value);
    }

    let output = cmd.output().unwrap();
    TestResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
