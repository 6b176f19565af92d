//! SCM status queries
//!
//! Reports the files changed in the working copy. The provider is chosen
//! from the workspace's SCM connection URL; only git is supported, driven
//! through the `git` executable found on `PATH`.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::config::defaults::GIT_CONNECTION_PREFIX;
use crate::core::changes::{ChangedFile, ScmFileStatus};

/// SCM operation errors
#[derive(Error, Debug)]
pub enum ScmError {
    /// No connection URL configured
    #[error("No SCM connection configured: set `connection` in the [scm] table of reactor.toml or pass --scm-connection")]
    MissingConfiguration,

    /// Connection URL names a provider other than git
    #[error("Unsupported SCM connection '{connection}': only scm:git: connections are supported")]
    UnsupportedProvider { connection: String },

    /// `git` is not installed
    #[error("git executable not found in PATH")]
    GitNotFound,

    /// A status command failed
    #[error("'git {command}' failed in '{dir}': {error}")]
    StatusFailed {
        command: String,
        dir: PathBuf,
        error: String,
    },
}

/// Something that can list the changed files of a working copy
pub trait ScmStatus {
    /// Changed files below `base_dir`, with absolute paths
    fn changed_files(&self, base_dir: &Path) -> Result<Vec<ChangedFile>, ScmError>;
}

/// Pick the status provider for a connection URL
pub fn provider_for(connection: Option<&str>) -> Result<Box<dyn ScmStatus>, ScmError> {
    let connection = connection.ok_or(ScmError::MissingConfiguration)?;
    if connection.starts_with(GIT_CONNECTION_PREFIX) {
        tracing::debug!("Using git for SCM connection {connection}");
        Ok(Box::new(GitStatus::locate()?))
    } else {
        Err(ScmError::UnsupportedProvider {
            connection: connection.to_string(),
        })
    }
}

/// Git working copy status via `git status --porcelain`
#[derive(Debug, Clone)]
pub struct GitStatus {
    git: PathBuf,
}

impl GitStatus {
    /// Find `git` on `PATH`
    pub fn locate() -> Result<Self, ScmError> {
        which::which("git")
            .map(|git| Self { git })
            .map_err(|_| ScmError::GitNotFound)
    }

    fn run(&self, dir: &Path, args: &[&str]) -> Result<String, ScmError> {
        let failed = |error: String| ScmError::StatusFailed {
            command: args.join(" "),
            dir: dir.to_path_buf(),
            error,
        };

        let output = Command::new(&self.git)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| failed(e.to_string()))?;

        if !output.status.success() {
            return Err(failed(String::from_utf8_lossy(&output.stderr).trim().to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ScmStatus for GitStatus {
    fn changed_files(&self, base_dir: &Path) -> Result<Vec<ChangedFile>, ScmError> {
        let top_level = self.run(base_dir, &["rev-parse", "--show-toplevel"])?;
        let top_level = PathBuf::from(top_level.trim());

        let status = self.run(
            base_dir,
            &["status", "--porcelain", "-z", "--untracked-files=all", "--", "."],
        )?;
        let files = parse_porcelain(&status, &top_level);
        tracing::debug!("git reported {} changed files", files.len());
        Ok(files)
    }
}

/// Parse `git status --porcelain -z` output
///
/// Paths in the output are relative to the repository `root`. Ignored
/// entries (`!!`) are skipped. Renames and copies carry their source path
/// as an extra entry: a rename source is reported as deleted, since its
/// project lost the file; a copy source is unchanged and skipped.
pub fn parse_porcelain(output: &str, root: &Path) -> Vec<ChangedFile> {
    let mut files = Vec::new();
    let mut entries = output.split('\0').filter(|entry| !entry.is_empty());

    while let Some(entry) = entries.next() {
        let (Some(code), Some(path)) = (entry.get(..2), entry.get(3..)) else {
            tracing::warn!("Skipping malformed status entry '{entry}'");
            continue;
        };

        if code.contains(['R', 'C']) {
            let source = entries.next();
            if let Some(source) = source.filter(|_| code.contains('R')) {
                files.push(ChangedFile::new(root.join(source), ScmFileStatus::Deleted));
            }
        }

        let status = match code {
            "!!" => continue,
            "??" => ScmFileStatus::Unknown,
            c if c.contains('D') => ScmFileStatus::Deleted,
            c if c.contains('R') => ScmFileStatus::Renamed,
            c if c.contains(['A', 'C']) => ScmFileStatus::Added,
            _ => ScmFileStatus::Modified,
        };
        files.push(ChangedFile::new(root.join(path), status));
    }

    files
}
