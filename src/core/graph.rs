//! Project graph
//!
//! Immutable view over the projects of one workspace. Nodes live in an arena
//! indexed by [`NodeId`] in declaration order; edges are stored on both ends
//! so traversals can walk dependencies (children) or dependents (parents)
//! without searching.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::coordinate::ProjectCoordinate;
use crate::error::GraphError;

/// Index of a node in the graph arena
///
/// Ids follow declaration order, so comparing ids compares declaration order.
pub type NodeId = usize;

/// One project as collected from the workspace, before edges are resolved
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    /// Project coordinate
    pub coordinate: ProjectCoordinate,
    /// Absolute project directory
    pub directory: PathBuf,
    /// Absolute path of the project descriptor file
    pub descriptor: PathBuf,
    /// Declared dependencies, in or out of the workspace
    pub dependencies: Vec<ProjectCoordinate>,
}

/// A project in the graph
#[derive(Debug, Clone)]
pub struct ProjectNode {
    id: NodeId,
    coordinate: ProjectCoordinate,
    directory: PathBuf,
    descriptor: PathBuf,
    children: Vec<NodeId>,
    parents: Vec<NodeId>,
}

impl ProjectNode {
    /// Arena id (declaration index)
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Project coordinate
    pub fn coordinate(&self) -> &ProjectCoordinate {
        &self.coordinate
    }

    /// `groupId:artifactId`
    pub fn label(&self) -> String {
        self.coordinate.label()
    }

    /// Absolute project directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Absolute descriptor path
    pub fn descriptor(&self) -> &Path {
        &self.descriptor
    }

    /// Workspace projects this project depends on
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Workspace projects that depend on this project
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }
}

/// Dependency graph of a workspace
///
/// An edge `A -> B` means A depends on B: B is a child of A and A is a parent
/// of B. Acyclicity is not verified here; the build order planner reports a
/// cycle if it meets one.
#[derive(Debug)]
pub struct ProjectGraph {
    nodes: Vec<ProjectNode>,
    index: HashMap<ProjectCoordinate, NodeId>,
}

impl ProjectGraph {
    /// Build the graph from the workspace's projects
    ///
    /// Dependencies on coordinates outside the workspace are external and are
    /// dropped. Fails with [`GraphError::EmptyGraph`] when `projects` is empty.
    pub fn build(base_dir: &Path, projects: Vec<ProjectSpec>) -> Result<Self, GraphError> {
        if projects.is_empty() {
            return Err(GraphError::EmptyGraph {
                base_dir: base_dir.to_path_buf(),
            });
        }

        let mut index: HashMap<ProjectCoordinate, NodeId> = HashMap::with_capacity(projects.len());
        for (id, spec) in projects.iter().enumerate() {
            if let Some(&first) = index.get(&spec.coordinate) {
                return Err(GraphError::DuplicateCoordinate {
                    coordinate: spec.coordinate.label(),
                    first: projects[first].directory.clone(),
                    second: spec.directory.clone(),
                });
            }
            index.insert(spec.coordinate.clone(), id);
        }

        let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); projects.len()];
        let mut parents: Vec<Vec<NodeId>> = vec![Vec::new(); projects.len()];

        for (id, spec) in projects.iter().enumerate() {
            for dep in &spec.dependencies {
                let Some(&dep_id) = index.get(dep) else {
                    tracing::debug!("{} depends on external {dep}, ignoring", spec.coordinate);
                    continue;
                };
                if dep_id == id {
                    tracing::warn!("{} declares a dependency on itself, ignoring", spec.coordinate);
                    continue;
                }
                if !children[id].contains(&dep_id) {
                    children[id].push(dep_id);
                    parents[dep_id].push(id);
                }
            }
        }

        let nodes = projects
            .into_iter()
            .zip(children.into_iter().zip(parents))
            .enumerate()
            .map(|(id, (spec, (children, parents)))| ProjectNode {
                id,
                coordinate: spec.coordinate,
                directory: spec.directory,
                descriptor: spec.descriptor,
                children,
                parents,
            })
            .collect::<Vec<_>>();

        tracing::debug!("Built project graph with {} projects", nodes.len());

        Ok(Self { nodes, index })
    }

    /// Look up a node by its `groupId:artifactId` label
    pub fn node_for_label(&self, label: &str) -> Result<&ProjectNode, GraphError> {
        label
            .split_once(':')
            .and_then(|(group, artifact)| {
                self.node_for(&ProjectCoordinate::new(group, artifact))
            })
            .ok_or_else(|| GraphError::UnknownProject {
                coordinate: label.to_string(),
            })
    }

    /// Look up a node by coordinate
    pub fn node_for(&self, coordinate: &ProjectCoordinate) -> Option<&ProjectNode> {
        self.index.get(coordinate).map(|&id| &self.nodes[id])
    }

    /// Node by arena id
    ///
    /// Ids handed out by this graph are always valid.
    pub fn node(&self, id: NodeId) -> &ProjectNode {
        &self.nodes[id]
    }

    /// All nodes in declaration order
    pub fn all_nodes(&self) -> &[ProjectNode] {
        &self.nodes
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a successfully built graph
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
