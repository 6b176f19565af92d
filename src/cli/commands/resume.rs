//! Resume command implementation
//!
//! Implements `reactor resume`: builds the whole workspace in order,
//! skipping everything before the given project.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::reactor::run_reactor;
use super::{BuildArgs, ResumeArgs};
use crate::cli::output::OutputConfig;
use crate::core::config::Mode;

/// Arguments of `resume`
#[derive(Args, Debug, Clone, Default)]
pub struct ResumeCommandArgs {
    #[command(flatten)]
    pub resume: ResumeArgs,

    #[command(flatten)]
    pub build: BuildArgs,
}

/// Execute the resume command
pub fn execute(base_dir: &Path, args: ResumeCommandArgs, output: &OutputConfig) -> Result<()> {
    run_reactor(base_dir, Mode::Resume, args.build.into_request(args.resume), output)
}
