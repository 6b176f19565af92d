//! Configuration constants
//!
//! - [`defaults`] - Built-in defaults and well-known file names

pub mod defaults;
