//! Reactor pipeline
//!
//! Turns a [`ReactorConfig`] and a project graph into a [`BuildPlan`]:
//!
//! 1. collect seed projects (artifacts, folders, or changed files)
//! 2. close them over dependencies or dependents
//! 3. order the closure
//! 4. optionally cut the order at a resume point
//!
//! The SCM is not queried here; changed files are passed in by the caller.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::core::changes::{exclude_unknown, map_changed_files, ChangedFile};
use crate::core::config::{Mode, ReactorConfig};
use crate::core::coordinate::ProjectCoordinate;
use crate::core::folders::{resolve_folder_paths, resolve_folders};
use crate::core::graph::ProjectGraph;
use crate::core::pather::relative_path;
use crate::core::planner::{full_order, order, BuildOrder};
use crate::core::resume::{resume_from, ResumeKey};
use crate::core::selector::closure;
use crate::error::{PipelineError, ReactorError};

/// One project of a build plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedProject {
    /// Project coordinate
    pub coordinate: ProjectCoordinate,
    /// Project directory relative to the base directory
    pub folder: String,
    /// Descriptor path relative to the base directory
    pub descriptor: String,
}

/// Ordered projects plus the goals to run on each
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    /// Projects in build order
    pub projects: Vec<PlannedProject>,
    /// Goals passed to the build tool
    pub goals: Vec<String>,
}

impl BuildPlan {
    /// Plan for `order`, with paths relative to `base_dir`
    pub fn from_order(order: &BuildOrder<'_>, base_dir: &Path, goals: &[String]) -> Result<Self, ReactorError> {
        let projects = order
            .iter()
            .map(|node| -> Result<PlannedProject, ReactorError> {
                Ok(PlannedProject {
                    coordinate: node.coordinate().clone(),
                    folder: relative_path(base_dir, node.directory(), false)?,
                    descriptor: relative_path(base_dir, node.descriptor(), false)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            projects,
            goals: goals.to_vec(),
        })
    }

    /// Whether there is nothing to build
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// `groupId:artifactId` labels in build order
    pub fn labels(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.coordinate.label()).collect()
    }
}

/// Compute the build plan for `config`
///
/// `changed_files` is only consulted in [`Mode::MakeScmChanges`].
pub fn plan(
    config: &ReactorConfig,
    graph: &ProjectGraph,
    changed_files: &[ChangedFile],
) -> Result<BuildPlan, ReactorError> {
    let default_group = config.default_group.as_deref();
    let build_order = match config.mode.direction() {
        None => full_order(graph)?,
        Some(direction) => {
            let seeds = seeds(config, graph, changed_files)?;
            if seeds.is_empty() {
                if config.mode == Mode::MakeScmChanges {
                    tracing::info!("No changed projects");
                    return Ok(BuildPlan {
                        projects: Vec::new(),
                        goals: config.goals.clone(),
                    });
                }
                return Err(PipelineError::NoSeeds.into());
            }

            let labels = seeds.iter().map(ProjectCoordinate::label);
            let subset = closure(graph, labels, direction)?;
            tracing::debug!(
                "{} seed projects expand to {} with their {direction}",
                seeds.len(),
                subset.len()
            );
            order(&subset, graph)?
        }
    };

    let resume_folder = config.resume_folder.as_deref();
    let resume_artifact = config.resume_artifact.as_deref();
    let key = if config.mode == Mode::Resume {
        Some(ResumeKey::from_specifiers(
            &config.base_dir,
            resume_folder,
            resume_artifact,
            default_group,
        )?)
    } else {
        ResumeKey::optional(&config.base_dir, resume_folder, resume_artifact, default_group)?
    };

    let build_order = match key {
        Some(key) => resume_from(&build_order, &key)?,
        None => build_order,
    };

    tracing::info!("Build order: {}", build_order.labels().join(", "));
    BuildPlan::from_order(&build_order, &config.base_dir, &config.goals)
}

fn seeds(
    config: &ReactorConfig,
    graph: &ProjectGraph,
    changed_files: &[ChangedFile],
) -> Result<BTreeSet<ProjectCoordinate>, ReactorError> {
    if config.mode == Mode::MakeScmChanges {
        let files = exclude_unknown(changed_files.to_vec(), config.include_unknown);
        let folders = map_changed_files(&files, graph, &config.base_dir)?;
        if folders.is_empty() {
            return Ok(BTreeSet::new());
        }
        tracing::debug!("Changed folders: {}", folders.iter().cloned().collect::<Vec<_>>().join(", "));
        return Ok(resolve_folder_paths(&config.base_dir, &folders, graph, &BTreeSet::new())?);
    }

    let mut seeds = config
        .artifacts
        .iter()
        .map(|label| ProjectCoordinate::parse(label, config.default_group.as_deref()))
        .collect::<Result<BTreeSet<_>, _>>()?;

    if let Some(folders) = &config.folders {
        seeds = resolve_folders(&config.base_dir, folders, graph, &seeds)?;
    }
    Ok(seeds)
}
