//! Make command implementation
//!
//! Implements `reactor make` and `reactor make-dependents`.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::reactor::run_reactor;
use super::{BuildArgs, ResumeArgs};
use crate::cli::output::OutputConfig;
use crate::core::config::{Mode, Request};

/// Arguments of the make commands
#[derive(Args, Debug, Clone, Default)]
pub struct MakeArgs {
    /// Comma-separated artifacts (`groupId:artifactId` or `artifactId`)
    #[arg(short, long)]
    pub artifacts: Option<String>,

    /// Comma-separated project folders, relative to the workspace
    #[arg(short, long)]
    pub folders: Option<String>,

    #[command(flatten)]
    pub resume: ResumeArgs,

    #[command(flatten)]
    pub build: BuildArgs,
}

/// Execute a make command
pub fn execute(base_dir: &Path, mode: Mode, args: MakeArgs, output: &OutputConfig) -> Result<()> {
    let request = Request {
        artifacts: args.artifacts,
        folders: args.folders,
        ..args.build.into_request(args.resume)
    };
    run_reactor(base_dir, mode, request, output)
}
