//! Build tool invocation
//!
//! Runs the build tool once per planned project, in plan order, stopping at
//! the first failure.

use std::path::{Path, PathBuf};
use std::process::Command;

use indicatif::ProgressBar;
use thiserror::Error;

use crate::core::pipeline::BuildPlan;

/// Build invocation errors
#[derive(Error, Debug)]
pub enum InvokeError {
    /// Build tool is not installed
    #[error("Build executable '{executable}' not found in PATH")]
    ExecutableNotFound { executable: String },

    /// Build tool could not be started
    #[error("Failed to run '{executable}' for '{project}': {error}")]
    SpawnFailed {
        executable: String,
        project: String,
        error: String,
    },

    /// Build tool reported a failure
    #[error("Build failed for '{project}' (exit code {})", code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    BuildFailed { project: String, code: Option<i32> },
}

/// Something that executes a build plan
pub trait Invoker {
    /// Run every project of `plan`, relative paths resolved against `base_dir`
    fn invoke(&self, plan: &BuildPlan, base_dir: &Path) -> Result<(), InvokeError>;
}

/// Runs `<executable> -f <descriptor> <goals...>` as a child process per project
#[derive(Debug)]
pub struct ProcessInvoker {
    executable: PathBuf,
    progress: ProgressBar,
}

impl ProcessInvoker {
    /// Find `executable` on `PATH` (paths are taken as is)
    pub fn locate(executable: &str, progress: ProgressBar) -> Result<Self, InvokeError> {
        let executable = which::which(executable).map_err(|_| InvokeError::ExecutableNotFound {
            executable: executable.to_string(),
        })?;
        tracing::debug!("Using build executable {}", executable.display());
        Ok(Self {
            executable,
            progress,
        })
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&self, plan: &BuildPlan, base_dir: &Path) -> Result<(), InvokeError> {
        self.progress.set_length(plan.projects.len() as u64);

        for project in &plan.projects {
            let label = project.coordinate.label();
            self.progress.set_message(label.clone());
            tracing::info!("Building {label} ({})", project.descriptor);

            let status = self.progress.suspend(|| {
                Command::new(&self.executable)
                    .arg("-f")
                    .arg(&project.descriptor)
                    .args(&plan.goals)
                    .current_dir(base_dir)
                    .status()
            });
            let status = status.map_err(|e| InvokeError::SpawnFailed {
                executable: self.executable.display().to_string(),
                project: label.clone(),
                error: e.to_string(),
            })?;

            if !status.success() {
                self.progress.abandon();
                return Err(InvokeError::BuildFailed {
                    project: label,
                    code: status.code(),
                });
            }
            self.progress.inc(1);
        }

        self.progress.finish_and_clear();
        Ok(())
    }
}
