//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary workspace directory plus an isolated config
/// directory, and provides utilities for setting up test scenarios.
pub struct TestWorkspace {
    /// Temporary directory for the workspace
    pub dir: TempDir,
    /// Temporary directory used as `REACTOR_CONFIG_DIR`
    pub config_dir: TempDir,
}

impl TestWorkspace {
    /// Create a new empty workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            config_dir: TempDir::new().expect("Failed to create config directory"),
        }
    }

    /// Workspace with the sample listing and its project folders
    pub fn sample() -> Self {
        let ws = Self::new();
        ws.create_file("reactor.toml", SAMPLE_LISTING);
        for dir in ["app", "core", "web", "tools"] {
            ws.create_file(&format!("{dir}/pom.xml"), "<project/>\n");
        }
        ws
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the workspace
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the workspace
    #[allow(dead_code)]
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Write the global `config.toml`
    #[allow(dead_code)]
    pub fn write_global_config(&self, content: &str) {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write global config");
    }

    /// Command running reactor in the workspace with the isolated config dir
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_reactor"));
        cmd.current_dir(self.dir.path());
        cmd.env("REACTOR_CONFIG_DIR", self.config_dir.path());
        cmd.env_remove("REACTOR_EXECUTABLE");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Run reactor with `args`
    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute reactor")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string
#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Plan lines printed by `--print-only`, as `groupId:artifactId` labels
#[allow(dead_code)]
pub fn plan_labels(output: &Output) -> Vec<String> {
    stdout(output)
        .lines()
        .filter_map(|line| line.split(" -> ").next())
        .map(str::to_string)
        .collect()
}

/// Workspace-relative path spelled with the platform separator
#[allow(dead_code)]
pub fn native(path: &str) -> String {
    Path::new(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(std::path::MAIN_SEPARATOR_STR)
}

/// Sample workspace listing
///
/// `app -> core`, `web -> core, app`, `tools` standalone.
pub const SAMPLE_LISTING: &str = r#"
[workspace]
default_group = "org.acme"

[scm]
connection = "scm:git:https://example.com/acme.git"

[[project]]
artifact = "app"
path = "app"
dependencies = ["core", "org.junit:junit"]

[[project]]
artifact = "core"
path = "core"

[[project]]
artifact = "web"
path = "web"
dependencies = ["core", "app"]

[[project]]
artifact = "tools"
path = "tools"
"#;
