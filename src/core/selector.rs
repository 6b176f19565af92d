//! Subset selection
//!
//! Expands a seed set of projects to the closure reachable along one edge
//! direction: forward (what the seeds depend on) for `make`, backward (what
//! depends on the seeds) for `make-dependents`.

use std::collections::BTreeSet;

use crate::core::coordinate::ProjectCoordinate;
use crate::core::graph::{NodeId, ProjectGraph, ProjectNode};
use crate::error::GraphError;

/// Edge direction followed by a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow child edges: the seeds' dependencies
    Forward,
    /// Follow parent edges: the seeds' dependents
    Backward,
}

impl Direction {
    fn neighbours(self, node: &ProjectNode) -> &[NodeId] {
        match self {
            Self::Forward => node.children(),
            Self::Backward => node.parents(),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "dependencies"),
            Self::Backward => write!(f, "dependents"),
        }
    }
}

/// Compute the closure of `seed_labels` along `direction`
///
/// Every seed is a member of its own closure. All seeds are resolved before
/// the walk starts, so an unknown label fails without partial work.
pub fn closure<I, S>(
    graph: &ProjectGraph,
    seed_labels: I,
    direction: Direction,
) -> Result<BTreeSet<ProjectCoordinate>, GraphError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stack: Vec<NodeId> = seed_labels
        .into_iter()
        .map(|label| graph.node_for_label(label.as_ref()).map(ProjectNode::id))
        .collect::<Result<_, _>>()?;

    let mut visited = vec![false; graph.len()];
    let mut result = BTreeSet::new();

    while let Some(id) = stack.pop() {
        if visited[id] {
            continue;
        }
        visited[id] = true;

        let node = graph.node(id);
        result.insert(node.coordinate().clone());

        for &next in direction.neighbours(node) {
            if !visited[next] {
                tracing::trace!("{} -> {}", node.coordinate(), graph.node(next).coordinate());
                stack.push(next);
            }
        }
    }

    tracing::debug!("Closure over {direction} holds {} projects", result.len());
    Ok(result)
}

/// Seeds plus everything they transitively depend on
pub fn forward_closure<I, S>(
    graph: &ProjectGraph,
    seed_labels: I,
) -> Result<BTreeSet<ProjectCoordinate>, GraphError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    closure(graph, seed_labels, Direction::Forward)
}

/// Seeds plus everything that transitively depends on them
pub fn backward_closure<I, S>(
    graph: &ProjectGraph,
    seed_labels: I,
) -> Result<BTreeSet<ProjectCoordinate>, GraphError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    closure(graph, seed_labels, Direction::Backward)
}
