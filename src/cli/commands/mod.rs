//! CLI command implementations
//!
//! Each command is implemented in its own submodule. All of them end in
//! [`reactor::run_reactor`], which loads the workspace, plans, and builds.

pub mod make;
pub mod make_scm_changes;
pub mod reactor;
pub mod resume;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::output::OutputConfig;
use crate::core::config::{Mode, Request};

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Comma-separated goals to run on each project [default: install]
    #[arg(short, long)]
    pub goals: Option<String>,

    /// Group id for artifacts given without one
    #[arg(long)]
    pub group: Option<String>,

    /// Print the build order instead of running it
    #[arg(short = 'n', long)]
    pub print_only: bool,

    /// Build tool to run for each project [default: mvn]
    #[arg(long, env = "REACTOR_EXECUTABLE")]
    pub executable: Option<String>,
}

/// Where to pick up an interrupted build
#[derive(Args, Debug, Clone, Default)]
pub struct ResumeArgs {
    /// Resume from the project in this folder
    #[arg(long, value_name = "FOLDER")]
    pub from_folder: Option<PathBuf>,

    /// Resume from this artifact (`groupId:artifactId` or `artifactId`)
    #[arg(long, value_name = "ARTIFACT")]
    pub from_artifact: Option<String>,
}

impl BuildArgs {
    /// Request carrying these options and the resume point
    pub fn into_request(self, resume: ResumeArgs) -> Request {
        Request {
            goals: self.goals,
            group: self.group,
            print_only: self.print_only,
            executable: self.executable,
            from_folder: resume.from_folder,
            from_artifact: resume.from_artifact,
            ..Request::default()
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the given projects and everything they depend on
    Make(make::MakeArgs),

    /// Build the given projects and everything that depends on them
    MakeDependents(make::MakeArgs),

    /// Build projects with uncommitted changes and everything that depends on them
    MakeScmChanges(make_scm_changes::ScmChangesArgs),

    /// Build the whole workspace, starting from a given project
    Resume(resume::ResumeCommandArgs),
}

impl Commands {
    /// Execute the command against the workspace in `base_dir`
    pub fn run(self, base_dir: &Path, output: &OutputConfig) -> Result<()> {
        match self {
            Self::Make(args) => make::execute(base_dir, Mode::Make, args, output),
            Self::MakeDependents(args) => make::execute(base_dir, Mode::MakeDependents, args, output),
            Self::MakeScmChanges(args) => make_scm_changes::execute(base_dir, args, output),
            Self::Resume(args) => resume::execute(base_dir, args, output),
        }
    }
}
