//! Reactor CLI - subset builds for multi-project workspaces
//!
//! Entry point for the reactor command-line application.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use reactor::cli::output::display_error;
use reactor::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };

    // Logs go to stderr; stdout is reserved for the build plan
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
}
