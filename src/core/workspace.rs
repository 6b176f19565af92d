//! Workspace listing (reactor.toml) parsing
//!
//! The listing names every project of the workspace with its directory and
//! the coordinates it depends on. It is the materialized project list the
//! rest of the pipeline works from.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_DESCRIPTOR, WORKSPACE_FILE};
use crate::core::coordinate::ProjectCoordinate;
use crate::core::graph::{ProjectGraph, ProjectSpec};
use crate::core::pather::absolutize;
use crate::error::{ReactorError, WorkspaceError};
use crate::infra::filesystem::read_file;

/// The workspace listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceManifest {
    /// Workspace-wide settings
    #[serde(default)]
    pub workspace: WorkspaceSettings,

    /// SCM settings
    #[serde(default)]
    pub scm: ScmSettings,

    /// Projects in declaration order
    #[serde(default, rename = "project")]
    pub projects: Vec<ProjectEntry>,
}

/// `[workspace]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceSettings {
    /// Group id for bare artifact ids
    #[serde(default)]
    pub default_group: Option<String>,
}

/// `[scm]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScmSettings {
    /// SCM connection URL, e.g. `scm:git:https://host/repo.git`
    #[serde(default)]
    pub connection: Option<String>,
}

/// One `[[project]]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectEntry {
    /// Group id, defaults to the workspace default group
    #[serde(default)]
    pub group: Option<String>,

    /// Artifact id
    pub artifact: String,

    /// Directory relative to the workspace base directory
    pub path: PathBuf,

    /// Descriptor file name inside the directory
    #[serde(default)]
    pub descriptor: Option<String>,

    /// Dependency labels; bare ids use the default group
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl WorkspaceManifest {
    /// Parse a listing from TOML
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `reactor.toml` from `base_dir`
    ///
    /// A missing listing yields an empty workspace; building a graph from it
    /// then reports that this is not a multi-project build.
    pub fn load(base_dir: &Path) -> Result<Self, WorkspaceError> {
        let path = base_dir.join(WORKSPACE_FILE);
        if !path.exists() {
            tracing::debug!("No {WORKSPACE_FILE} in {}", base_dir.display());
            return Ok(Self::default());
        }

        let content = read_file(&path)?;
        Self::from_toml(&content).map_err(|e| WorkspaceError::Parse {
            path,
            error: e.to_string(),
        })
    }

    /// Resolve the listing into project specs with absolute paths
    ///
    /// `default_group` overrides `[workspace] default_group` when set.
    pub fn project_specs(
        &self,
        base_dir: &Path,
        default_group: Option<&str>,
    ) -> Result<Vec<ProjectSpec>, WorkspaceError> {
        let default_group = default_group.or(self.workspace.default_group.as_deref());

        self.projects
            .iter()
            .map(|entry| {
                let group = entry.group.as_deref().or(default_group).ok_or_else(|| {
                    WorkspaceError::InvalidCoordinate {
                        label: entry.artifact.clone(),
                        reason: "no group id given and no default group configured".to_string(),
                    }
                })?;
                let coordinate = ProjectCoordinate::parse(&format!("{group}:{}", entry.artifact), None)?;
                let directory = absolutize(base_dir, &entry.path);
                let descriptor = directory.join(entry.descriptor.as_deref().unwrap_or(DEFAULT_DESCRIPTOR));
                let dependencies = entry
                    .dependencies
                    .iter()
                    .map(|label| ProjectCoordinate::parse(label, default_group))
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(ProjectSpec {
                    coordinate,
                    directory,
                    descriptor,
                    dependencies,
                })
            })
            .collect()
    }

    /// Build the project graph of this workspace
    pub fn graph(&self, base_dir: &Path, default_group: Option<&str>) -> Result<ProjectGraph, ReactorError> {
        let specs = self.project_specs(base_dir, default_group)?;
        Ok(ProjectGraph::build(base_dir, specs)?)
    }
}
