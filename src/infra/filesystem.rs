//! Filesystem operations
//!
//! Handles existence checks and path canonicalization.

use std::path::{Path, PathBuf};

use crate::core::pather::normalize_path;
use crate::error::WorkspaceError;

/// Canonical form of `path` when it exists, its lexical normalization otherwise
///
/// Lets directories that are spelled differently (symlinks, `..`) compare equal.
pub fn canonical_or_normalized(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| normalize_path(path))
}

/// Whether two paths name the same directory
pub fn same_dir(a: &Path, b: &Path) -> bool {
    normalize_path(a) == normalize_path(b) || canonical_or_normalized(a) == canonical_or_normalized(b)
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, WorkspaceError> {
    std::fs::read_to_string(path).map_err(|e| WorkspaceError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
