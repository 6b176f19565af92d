//! Change set mapping
//!
//! Turns the changed files reported by the SCM into the folders of the
//! projects that own them.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::graph::{ProjectGraph, ProjectNode};
use crate::core::pather::{normalize_path, relative_path};
use crate::error::PathError;

/// Status of a file in the working copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScmFileStatus {
    /// Newly added to version control
    Added,
    /// Modified content
    Modified,
    /// Removed
    Deleted,
    /// Moved or renamed
    Renamed,
    /// Not under version control
    Unknown,
}

/// A changed file reported by the SCM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Absolute path of the file
    pub path: PathBuf,
    /// Working copy status
    pub status: ScmFileStatus,
}

impl ChangedFile {
    /// Create a changed file entry
    pub fn new(path: impl Into<PathBuf>, status: ScmFileStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Drop untracked files unless `include_unknown` is set
pub fn exclude_unknown(files: Vec<ChangedFile>, include_unknown: bool) -> Vec<ChangedFile> {
    if include_unknown {
        return files;
    }
    files
        .into_iter()
        .filter(|file| {
            let keep = file.status != ScmFileStatus::Unknown;
            if !keep {
                tracing::debug!("Ignoring untracked file {}", file.path.display());
            }
            keep
        })
        .collect()
}

/// Map changed files to the folders, relative to `base_dir`, of their owning projects
///
/// A file belongs to the deepest project directory that contains it.
/// Files outside every project are ignored.
pub fn map_changed_files(
    changed_files: &[ChangedFile],
    graph: &ProjectGraph,
    base_dir: &Path,
) -> Result<BTreeSet<String>, PathError> {
    let mut folders = BTreeSet::new();

    for file in changed_files {
        let path = normalize_path(&file.path);
        match owning_project(graph, &path) {
            Some(node) => {
                let folder = relative_path(base_dir, node.directory(), false)?;
                tracing::debug!("{} belongs to {} ({folder})", path.display(), node.coordinate());
                folders.insert(folder);
            }
            None => tracing::debug!("{} is not inside any project, ignoring", path.display()),
        }
    }

    Ok(folders)
}

fn owning_project<'g>(graph: &'g ProjectGraph, file: &Path) -> Option<&'g ProjectNode> {
    graph
        .all_nodes()
        .iter()
        .filter(|node| file.starts_with(normalize_path(node.directory())))
        .max_by_key(|node| node.directory().components().count())
}
