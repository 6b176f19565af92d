//! Core business logic module
//!
//! This module contains all business logic for reactor.
//! Apart from folder existence checks, it has NO I/O operations - those
//! belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`coordinate`] - `groupId:artifactId` project coordinates
//! - [`graph`] - Project dependency graph
//! - [`pather`] - Relative path computation
//! - [`folders`] - Folder to project resolution
//! - [`selector`] - Dependency and dependent closures
//! - [`planner`] - Build order planning
//! - [`resume`] - Resuming a build order
//! - [`changes`] - Changed file to project mapping
//! - [`workspace`] - Workspace listing (reactor.toml) parsing
//! - [`global_config`] - Global configuration management
//! - [`config`] - Resolved configuration of one run
//! - [`pipeline`] - Mode pipelines producing a build plan

pub mod changes;
pub mod config;
pub mod coordinate;
pub mod folders;
pub mod global_config;
pub mod graph;
pub mod pather;
pub mod pipeline;
pub mod planner;
pub mod resume;
pub mod selector;
pub mod workspace;
