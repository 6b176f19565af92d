//! Reactor - subset builds for multi-project workspaces
//!
//! This library selects a subset of the projects in a multi-project
//! workspace (by artifact, folder, or SCM changes), closes it over
//! dependencies or dependents, orders it so dependencies build first, and
//! runs the build tool on each project in turn.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (graph, selection, ordering)
//! - [`infra`] - Infrastructure layer (filesystem, SCM, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
