//! Resuming a build order
//!
//! Locates the project a previous, interrupted build should restart from
//! and drops everything before it.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::coordinate::ProjectCoordinate;
use crate::core::pather::absolutize;
use crate::core::planner::BuildOrder;
use crate::error::{ReactorError, ResumeError};
use crate::infra::filesystem::same_dir;

/// Identifies the project to resume from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeKey {
    /// Project whose directory is this absolute folder
    Folder(PathBuf),
    /// Project with this coordinate
    Coordinate(ProjectCoordinate),
}

impl ResumeKey {
    /// Build a key from the two optional specifiers
    ///
    /// Exactly one must be given. A relative folder is resolved against
    /// `base_dir`; an artifact without a group id is qualified with
    /// `default_group`.
    pub fn from_specifiers(
        base_dir: &Path,
        by_folder: Option<&Path>,
        by_coordinate: Option<&str>,
        default_group: Option<&str>,
    ) -> Result<Self, ReactorError> {
        match (by_folder, by_coordinate) {
            (Some(folder), Some(artifact)) => Err(ResumeError::AmbiguousSpecifier {
                folder: folder.to_path_buf(),
                artifact: artifact.to_string(),
            }
            .into()),
            (None, None) => Err(ResumeError::MissingSpecifier.into()),
            (Some(folder), None) => Ok(Self::Folder(absolutize(base_dir, folder))),
            (None, Some(artifact)) => Ok(Self::Coordinate(ProjectCoordinate::parse(
                artifact,
                default_group,
            )?)),
        }
    }

    /// Build a key only when at least one specifier is present
    pub fn optional(
        base_dir: &Path,
        by_folder: Option<&Path>,
        by_coordinate: Option<&str>,
        default_group: Option<&str>,
    ) -> Result<Option<Self>, ReactorError> {
        if by_folder.is_none() && by_coordinate.is_none() {
            return Ok(None);
        }
        Self::from_specifiers(base_dir, by_folder, by_coordinate, default_group).map(Some)
    }
}

impl fmt::Display for ResumeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder(path) => write!(f, "folder '{}'", path.display()),
            Self::Coordinate(coordinate) => write!(f, "artifact '{coordinate}'"),
        }
    }
}

/// The suffix of `order` starting at, and including, the project matching `key`
pub fn resume_from<'g>(order: &BuildOrder<'g>, key: &ResumeKey) -> Result<BuildOrder<'g>, ResumeError> {
    let start = order
        .iter()
        .position(|node| match key {
            ResumeKey::Folder(folder) => same_dir(node.directory(), folder),
            ResumeKey::Coordinate(coordinate) => node.coordinate() == coordinate,
        })
        .ok_or_else(|| ResumeError::NotFound {
            key: key.to_string(),
        })?;

    tracing::info!(
        "Resuming from {} (skipping {start} of {} projects)",
        order.projects()[start].coordinate(),
        order.len()
    );
    Ok(order.suffix(start))
}
