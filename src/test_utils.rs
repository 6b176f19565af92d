//! Test utilities for unit and property-based testing
//!
//! This module provides graph fixtures and generators for proptest.

#[cfg(test)]
pub mod fixtures {
    use std::collections::BTreeSet;
    use std::path::{Path, PathBuf};

    use crate::core::coordinate::ProjectCoordinate;
    use crate::core::graph::{ProjectGraph, ProjectSpec};

    /// Group id used by every fixture project
    pub const GROUP: &str = "g";

    /// Project `g:<name>` living in `/ws/<name>` and depending on `g:<dep>` for each dep
    pub fn spec(name: &str, deps: &[&str]) -> ProjectSpec {
        let directory = PathBuf::from("/ws").join(name);
        ProjectSpec {
            coordinate: ProjectCoordinate::new(GROUP, name),
            descriptor: directory.join("pom.xml"),
            directory,
            dependencies: deps
                .iter()
                .map(|dep| ProjectCoordinate::new(GROUP, *dep))
                .collect(),
        }
    }

    /// Coordinates `g:<name>` for each name
    pub fn coords(names: &[&str]) -> BTreeSet<ProjectCoordinate> {
        names
            .iter()
            .map(|name| ProjectCoordinate::new(GROUP, *name))
            .collect()
    }

    /// `a -> b -> c`, declared a, b, c
    pub fn chain_graph() -> ProjectGraph {
        ProjectGraph::build(
            Path::new("/ws"),
            vec![spec("a", &["b"]), spec("b", &["c"]), spec("c", &[])],
        )
        .expect("chain graph")
    }

    /// `top -> {left, right} -> bottom`, declared top, left, right, bottom
    pub fn diamond_graph() -> ProjectGraph {
        ProjectGraph::build(
            Path::new("/ws"),
            vec![
                spec("top", &["left", "right"]),
                spec("left", &["bottom"]),
                spec("right", &["bottom"]),
                spec("bottom", &[]),
            ],
        )
        .expect("diamond graph")
    }
}

#[cfg(test)]
pub mod generators {
    use std::collections::BTreeSet;
    use std::path::Path;

    use proptest::prelude::*;

    use crate::core::coordinate::ProjectCoordinate;
    use crate::core::graph::ProjectGraph;

    use super::fixtures::spec;

    /// Raw DAG description: a rank per node, an edge matrix and a subset mask
    ///
    /// An edge `i -> j` is kept only when `rank[j] < rank[i]`, which keeps the
    /// graph acyclic while letting dependencies point either way in
    /// declaration order.
    fn dag_parts(max_nodes: usize) -> impl Strategy<Value = (Vec<usize>, Vec<Vec<bool>>, Vec<bool>)> {
        (1..=max_nodes).prop_flat_map(|n| {
            (
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                proptest::collection::vec(
                    proptest::collection::vec(proptest::bool::weighted(0.3), n),
                    n,
                ),
                proptest::collection::vec(any::<bool>(), n),
            )
        })
    }

    fn build_dag(rank: &[usize], edges: &[Vec<bool>]) -> ProjectGraph {
        let names: Vec<String> = (0..rank.len()).map(|i| format!("p{i}")).collect();
        let specs = (0..rank.len())
            .map(|i| {
                let deps: Vec<&str> = (0..rank.len())
                    .filter(|&j| edges[i][j] && rank[j] < rank[i])
                    .map(|j| names[j].as_str())
                    .collect();
                spec(&names[i], &deps)
            })
            .collect();
        ProjectGraph::build(Path::new("/ws"), specs).expect("generated graph")
    }

    /// Generate an acyclic project graph with 1..=`max_nodes` projects
    pub fn dag(max_nodes: usize) -> impl Strategy<Value = ProjectGraph> {
        dag_parts(max_nodes).prop_map(|(rank, edges, _)| build_dag(&rank, &edges))
    }

    /// Generate an acyclic project graph together with an arbitrary subset of it
    pub fn dag_with_subset(
        max_nodes: usize,
    ) -> impl Strategy<Value = (ProjectGraph, BTreeSet<ProjectCoordinate>)> {
        dag_parts(max_nodes).prop_map(|(rank, edges, mask)| {
            let graph = build_dag(&rank, &edges);
            let subset = graph
                .all_nodes()
                .iter()
                .filter(|node| mask[node.id()])
                .map(|node| node.coordinate().clone())
                .collect();
            (graph, subset)
        })
    }

    /// Generate a valid artifact id (lowercase alphanumeric with hyphens)
    pub fn artifact_id() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,15}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::planner::full_order;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_dag_generator_is_acyclic(graph in dag(10)) {
            prop_assert!(!graph.is_empty());
            prop_assert!(full_order(&graph).is_ok());
        }

        #[test]
        fn test_artifact_id_generator(name in artifact_id()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
