//! Project coordinates
//!
//! A coordinate is the `groupId:artifactId` pair that identifies a project
//! inside a workspace.

use std::fmt;

use serde::Serialize;

use crate::error::WorkspaceError;

/// `(groupId, artifactId)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ProjectCoordinate {
    /// Group id
    pub group_id: String,
    /// Artifact id
    pub artifact_id: String,
}

impl ProjectCoordinate {
    /// Create a coordinate from its two parts
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    /// Parse a `groupId:artifactId` label
    ///
    /// A bare `artifactId` is qualified with `default_group`. Fails when the
    /// label has more than one `:`, an empty part, or is bare with no default
    /// group available.
    pub fn parse(label: &str, default_group: Option<&str>) -> Result<Self, WorkspaceError> {
        let label = label.trim();
        let invalid = |reason: &str| WorkspaceError::InvalidCoordinate {
            label: label.to_string(),
            reason: reason.to_string(),
        };

        match label.split_once(':') {
            Some((group, artifact)) => {
                if artifact.contains(':') {
                    return Err(invalid("expected at most one ':'"));
                }
                if group.is_empty() || artifact.is_empty() {
                    return Err(invalid("group and artifact ids must not be empty"));
                }
                Ok(Self::new(group, artifact))
            }
            None => {
                if label.is_empty() {
                    return Err(invalid("artifact id must not be empty"));
                }
                match default_group.filter(|g| !g.is_empty()) {
                    Some(group) => Ok(Self::new(group, label)),
                    None => Err(invalid("no group id given and no default group configured")),
                }
            }
        }
    }

    /// The `groupId:artifactId` label
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProjectCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Split a comma-separated list, dropping blank entries
pub fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}
