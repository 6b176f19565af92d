//! Error types for reactor
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Project graph errors
#[derive(Error, Debug)]
pub enum GraphError {
    /// No projects were collected
    #[error("No projects found in '{base_dir}': not a multi-project workspace")]
    EmptyGraph { base_dir: PathBuf },

    /// Two projects share a coordinate
    #[error("Duplicate project coordinate '{coordinate}' (declared by '{first}' and '{second}')")]
    DuplicateCoordinate {
        coordinate: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Requested coordinate is not part of the workspace
    #[error("Project '{coordinate}' not found in the workspace")]
    UnknownProject { coordinate: String },

    /// Dependency cycle between workspace projects
    #[error("Circular dependency detected between: {}", cycle.join(", "))]
    CircularDependency { cycle: Vec<String> },
}

/// Relative path computation errors
#[derive(Error, Debug)]
pub enum PathError {
    /// Paths live under different roots (drives, mounts)
    #[error("Paths '{context}' and '{dest}' have different roots ('{context_root}' vs '{dest_root}')")]
    DifferentRoots {
        context: String,
        dest: String,
        context_root: String,
        dest_root: String,
    },
}

/// Folder resolution errors
#[derive(Error, Debug)]
pub enum FolderError {
    /// Folder does not exist on disk
    #[error("Folder doesn't exist: {path}")]
    FolderNotFound { path: PathBuf },

    /// Folder exists but holds no workspace project
    #[error("No project matched folder '{folder}' ({path})")]
    NoFolderMatch { folder: String, path: PathBuf },
}

/// Resume point errors
#[derive(Error, Debug)]
pub enum ResumeError {
    /// Both a folder and a coordinate were given
    #[error("Specify either a folder ('{folder}') or an artifact ('{artifact}') to resume from, not both")]
    AmbiguousSpecifier { folder: PathBuf, artifact: String },

    /// Neither a folder nor a coordinate was given
    #[error("Specify a folder or an artifact to resume from")]
    MissingSpecifier,

    /// Resume key matched nothing in the build order
    #[error("Couldn't find a project in the build order matching {key}")]
    NotFound { key: String },
}

/// Workspace listing errors
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// Listing could not be read
    #[error("Failed to read workspace file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Listing is not valid TOML or misses fields
    #[error("Failed to parse workspace file '{path}': {error}")]
    Parse { path: PathBuf, error: String },

    /// A coordinate label is malformed
    #[error("Invalid project coordinate '{label}': {reason}")]
    InvalidCoordinate { label: String, reason: String },
}

/// Pipeline input errors
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A make mode was run without any artifacts or folders
    #[error("No projects requested: pass --artifacts and/or --folders")]
    NoSeeds,
}

/// Top-level reactor error type
#[derive(Error, Debug)]
pub enum ReactorError {
    /// Graph error
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Path error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Folder error
    #[error(transparent)]
    Folder(#[from] FolderError),

    /// Resume error
    #[error(transparent)]
    Resume(#[from] ResumeError),

    /// Workspace error
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// Pipeline error
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// SCM collaborator error
    #[error(transparent)]
    Scm(#[from] crate::infra::scm::ScmError),

    /// Invocation collaborator error
    #[error(transparent)]
    Invoke(#[from] crate::infra::invoker::InvokeError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] crate::core::global_config::ConfigError),
}
