//! Folder resolution
//!
//! Maps user-supplied workspace folders to the coordinates of the projects
//! that live in them.

use std::collections::BTreeSet;
use std::path::Path;

use crate::core::coordinate::{split_list, ProjectCoordinate};
use crate::core::graph::ProjectGraph;
use crate::core::pather::absolutize;
use crate::error::FolderError;
use crate::infra::filesystem::same_dir;

/// Resolve a comma-separated list of folders to project coordinates
///
/// Folders are relative to `base_dir` (absolute folders are taken as is).
/// Entries are trimmed and blank entries skipped; see [`resolve_folder_paths`].
pub fn resolve_folders(
    base_dir: &Path,
    folder_list: &str,
    graph: &ProjectGraph,
    seed: &BTreeSet<ProjectCoordinate>,
) -> Result<BTreeSet<ProjectCoordinate>, FolderError> {
    resolve_folder_paths(base_dir, split_list(folder_list).map(Path::new), graph, seed)
}

/// Resolve folders, taken verbatim, to project coordinates
///
/// The result is `seed` plus every project whose directory is one of the
/// folders. A folder that does not exist, or that holds no project, fails
/// the whole resolution so a typo never turns into a silent no-op.
pub fn resolve_folder_paths<I, P>(
    base_dir: &Path,
    folders: I,
    graph: &ProjectGraph,
    seed: &BTreeSet<ProjectCoordinate>,
) -> Result<BTreeSet<ProjectCoordinate>, FolderError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut result = seed.clone();

    for folder in folders {
        let folder = folder.as_ref();
        let path = absolutize(base_dir, folder);
        if !path.exists() {
            return Err(FolderError::FolderNotFound { path });
        }

        let mut matched = false;
        for node in graph.all_nodes() {
            if same_dir(node.directory(), &path) {
                tracing::debug!("Folder '{}' holds {}", folder.display(), node.coordinate());
                result.insert(node.coordinate().clone());
                matched = true;
            }
        }

        if !matched {
            return Err(FolderError::NoFolderMatch {
                folder: folder.display().to_string(),
                path,
            });
        }
    }

    Ok(result)
}
