//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use commands::Commands;
use output::OutputConfig;

use crate::core::pather::absolutize;
use crate::infra::filesystem::canonical_or_normalized;

/// Reactor - build a subset of a multi-project workspace
///
/// Selects projects by artifact, folder, or uncommitted changes, adds their
/// dependencies or dependents, and builds them in dependency order.
#[derive(Parser, Debug)]
#[command(name = "reactor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Workspace base directory (defaults to the current directory)
    #[arg(short = 'C', long = "dir", global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output configuration selected by the global flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json)
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = self.output_config();
        let Some(cmd) = self.command else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        let base_dir = match &self.dir {
            Some(dir) => absolutize(&current_dir, dir),
            None => current_dir,
        };
        let base_dir = canonical_or_normalized(&base_dir);
        tracing::debug!("Workspace base directory: {}", base_dir.display());

        cmd.run(&base_dir, &output)
    }
}
