//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem, SCM queries, and the build tool.
//! This module is the only place where side effects occur.

pub mod dirs;
pub mod filesystem;
pub mod invoker;
pub mod scm;
