//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress bars,
//! build plans, and formatted status messages to the user.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::core::pipeline::BuildPlan;

/// Create a progress bar for build steps
pub fn create_build_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} projects ({msg})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// How results are reported
///
/// Status messages go to stderr so stdout only ever carries the plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress everything but errors
    pub quiet: bool,
    /// Machine-readable output
    pub json: bool,
}

impl OutputConfig {
    /// Create an output configuration
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    /// Whether human-oriented messages and progress are shown
    pub fn interactive(&self) -> bool {
        !self.quiet && !self.json
    }

    /// Progress bar for `total` builds, hidden when not interactive
    pub fn build_bar(&self, total: u64) -> ProgressBar {
        if self.interactive() {
            create_build_bar(total)
        } else {
            ProgressBar::hidden()
        }
    }

    /// Report a success
    pub fn success(&self, message: &str) {
        if self.interactive() {
            eprintln!("{} {message}", status::SUCCESS);
        }
    }

    /// Report an informational message
    pub fn info(&self, message: &str) {
        if self.interactive() {
            eprintln!("{} {message}", status::INFO);
        }
    }
}

/// Print a build plan
///
/// Plain output is one `groupId:artifactId -> descriptor` line per project.
pub fn print_plan(plan: &BuildPlan, output: &OutputConfig) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    if plan.is_empty() {
        output.info("Nothing to build");
    }
    for project in &plan.projects {
        println!("{} -> {}", project.coordinate, project.descriptor);
    }
    Ok(())
}

/// Print an error with its causes
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error:#}", status::ERROR);
}
