//! Make-scm-changes command implementation
//!
//! Implements `reactor make-scm-changes`: builds the projects that own
//! uncommitted changes, plus their dependents.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::reactor::run_reactor;
use super::{BuildArgs, ResumeArgs};
use crate::cli::output::OutputConfig;
use crate::core::config::{Mode, Request};

/// Arguments of `make-scm-changes`
#[derive(Args, Debug, Clone, Default)]
pub struct ScmChangesArgs {
    /// Also count files not under version control as changes
    #[arg(long)]
    pub include_unknown: bool,

    /// SCM connection URL, overriding the one in reactor.toml
    #[arg(long, value_name = "URL")]
    pub scm_connection: Option<String>,

    #[command(flatten)]
    pub resume: ResumeArgs,

    #[command(flatten)]
    pub build: BuildArgs,
}

/// Execute the make-scm-changes command
pub fn execute(base_dir: &Path, args: ScmChangesArgs, output: &OutputConfig) -> Result<()> {
    let request = Request {
        include_unknown: args.include_unknown,
        scm_connection: args.scm_connection,
        ..args.build.into_request(args.resume)
    };
    run_reactor(base_dir, Mode::MakeScmChanges, request, output)
}
