//! Invocation configuration
//!
//! Everything one reactor run needs, merged once from the command line, the
//! workspace listing and the global config, then passed around read-only.
//! Precedence: command line, then `reactor.toml`, then `config.toml`, then
//! built-in defaults.

use std::path::PathBuf;

use crate::config::defaults::{DEFAULT_EXECUTABLE, DEFAULT_GOALS};
use crate::core::coordinate::split_list;
use crate::core::global_config::GlobalConfig;
use crate::core::selector::Direction;
use crate::core::workspace::WorkspaceManifest;

/// Which projects a run selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Requested projects and everything they depend on
    Make,
    /// Requested projects and everything that depends on them
    MakeDependents,
    /// Projects owning changed files and everything that depends on them
    MakeScmChanges,
    /// The whole workspace, from a resume point onwards
    Resume,
}

impl Mode {
    /// Closure direction, `None` when the whole workspace is built
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Make => Some(Direction::Forward),
            Self::MakeDependents | Self::MakeScmChanges => Some(Direction::Backward),
            Self::Resume => None,
        }
    }
}

/// Raw values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Comma-separated artifact labels
    pub artifacts: Option<String>,
    /// Comma-separated folders
    pub folders: Option<String>,
    /// Comma-separated goals
    pub goals: Option<String>,
    /// Default group id
    pub group: Option<String>,
    /// Print the plan instead of running it
    pub print_only: bool,
    /// Resume from this folder
    pub from_folder: Option<PathBuf>,
    /// Resume from this artifact
    pub from_artifact: Option<String>,
    /// Treat untracked files as changes
    pub include_unknown: bool,
    /// SCM connection override
    pub scm_connection: Option<String>,
    /// Build tool override
    pub executable: Option<String>,
}

/// Resolved configuration of one run
#[derive(Debug, Clone)]
pub struct ReactorConfig {
    /// Workspace base directory
    pub base_dir: PathBuf,
    /// Selection mode
    pub mode: Mode,
    /// Artifact labels as given
    pub artifacts: Vec<String>,
    /// Comma-separated folders as given
    pub folders: Option<String>,
    /// Group id for bare artifact ids
    pub default_group: Option<String>,
    /// Goals for every project
    pub goals: Vec<String>,
    /// Print the plan instead of running it
    pub print_only: bool,
    /// Resume folder specifier
    pub resume_folder: Option<PathBuf>,
    /// Resume artifact specifier
    pub resume_artifact: Option<String>,
    /// Treat untracked files as changes
    pub include_unknown: bool,
    /// SCM connection URL
    pub scm_connection: Option<String>,
    /// Build tool executable
    pub executable: String,
}

impl ReactorConfig {
    /// Merge the request with the workspace listing and global configuration
    pub fn resolve(
        base_dir: PathBuf,
        mode: Mode,
        request: Request,
        workspace: &WorkspaceManifest,
        global: &GlobalConfig,
    ) -> Self {
        let default_group = request
            .group
            .or_else(|| workspace.workspace.default_group.clone())
            .or_else(|| global.defaults.group.clone());

        let goals = request
            .goals
            .or_else(|| global.build.goals.clone())
            .unwrap_or_else(|| DEFAULT_GOALS.to_string());

        Self {
            base_dir,
            mode,
            artifacts: request
                .artifacts
                .as_deref()
                .map(|list| split_list(list).map(str::to_string).collect())
                .unwrap_or_default(),
            folders: request.folders.filter(|f| !f.trim().is_empty()),
            default_group,
            goals: split_list(&goals).map(str::to_string).collect(),
            print_only: request.print_only,
            resume_folder: request.from_folder,
            resume_artifact: request.from_artifact,
            include_unknown: request.include_unknown
                || global.scm.include_unknown.unwrap_or(false),
            scm_connection: request
                .scm_connection
                .or_else(|| workspace.scm.connection.clone()),
            executable: request
                .executable
                .or_else(|| global.build.executable.clone())
                .unwrap_or_else(|| DEFAULT_EXECUTABLE.to_string()),
        }
    }
}
