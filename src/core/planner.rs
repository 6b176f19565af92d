//! Build order planning
//!
//! Topologically sorts a subset of the project graph so that every project
//! comes after the workspace projects it depends on.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::core::coordinate::ProjectCoordinate;
use crate::core::graph::{ProjectGraph, ProjectNode};
use crate::error::GraphError;

/// Ordered sequence of projects to build
///
/// For every edge `A -> B` between two members, B precedes A.
#[derive(Debug, Clone)]
pub struct BuildOrder<'g> {
    projects: Vec<&'g ProjectNode>,
}

impl<'g> BuildOrder<'g> {
    /// Projects in build order
    pub fn projects(&self) -> &[&'g ProjectNode] {
        &self.projects
    }

    /// Iterate in build order
    pub fn iter(&self) -> impl Iterator<Item = &'g ProjectNode> + '_ {
        self.projects.iter().copied()
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether nothing is left to build
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// `groupId:artifactId` labels in build order
    pub fn labels(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.label()).collect()
    }

    /// A new order holding the projects from `start` onwards
    pub fn suffix(&self, start: usize) -> Self {
        Self {
            projects: self.projects[start.min(self.projects.len())..].to_vec(),
        }
    }
}

/// Order the projects in `subset`
///
/// Only edges with both ends in the subset constrain the order; projects
/// outside it are never added. Projects with no ordering relation between
/// them keep their declaration order, so repeated runs agree.
pub fn order<'g, 'c, I>(subset: I, graph: &'g ProjectGraph) -> Result<BuildOrder<'g>, GraphError>
where
    I: IntoIterator<Item = &'c ProjectCoordinate>,
{
    let mut member = vec![false; graph.len()];
    let mut size = 0;
    for coordinate in subset {
        let node = graph
            .node_for(coordinate)
            .ok_or_else(|| GraphError::UnknownProject {
                coordinate: coordinate.label(),
            })?;
        if !member[node.id()] {
            member[node.id()] = true;
            size += 1;
        }
    }

    // Pending dependency count per member; non-members stay at zero and are never queued
    let mut pending: Vec<usize> = graph
        .all_nodes()
        .iter()
        .map(|node| {
            if member[node.id()] {
                node.children().iter().filter(|&&child| member[child]).count()
            } else {
                0
            }
        })
        .collect();

    let mut ready: BinaryHeap<Reverse<usize>> = graph
        .all_nodes()
        .iter()
        .filter(|node| member[node.id()] && pending[node.id()] == 0)
        .map(|node| Reverse(node.id()))
        .collect();

    let mut projects = Vec::with_capacity(size);
    while let Some(Reverse(id)) = ready.pop() {
        let node = graph.node(id);
        projects.push(node);

        for &parent in node.parents() {
            if member[parent] {
                pending[parent] -= 1;
                if pending[parent] == 0 {
                    ready.push(Reverse(parent));
                }
            }
        }
    }

    if projects.len() != size {
        let cycle = graph
            .all_nodes()
            .iter()
            .filter(|node| member[node.id()] && pending[node.id()] > 0)
            .map(ProjectNode::label)
            .collect();
        return Err(GraphError::CircularDependency { cycle });
    }

    tracing::debug!("Planned build order of {} projects", projects.len());
    Ok(BuildOrder { projects })
}

/// Order every project in the graph
pub fn full_order(graph: &ProjectGraph) -> Result<BuildOrder<'_>, GraphError> {
    order(graph.all_nodes().iter().map(ProjectNode::coordinate), graph)
}
