//! Weighted graphs and path-finding over them
//!
//! Provides:
//! - An arena-backed directed graph with weighted nodes and edges
//! - One label-correcting search covering BFS, DFS, Dijkstra, Bellman-Ford and A*
//! - k edge-disjoint and node-disjoint path search
//! - An edge view trait deciding which edges a search may follow

pub mod algos;
pub mod model;
pub mod synthetic;
pub mod traversal;
pub mod types;

use std::fmt::Debug;

use crate::config::PathweaveConfig;
use crate::error::Result;

pub use algos::{
    bhandari, disjoint_paths, path_is_consistent, search, shortest_path_tree, solve, suurballe,
    Heuristic, SearchTree,
};
pub use model::{Edge, Graph, Node};
pub use synthetic::{EdgeRef, Step};
pub use traversal::{EdgeView, PlainView};
pub use types::{
    Algorithm, Cost, Disjointness, EdgeId, NodeId, PathResult, QueueDiscipline, SearchConfig,
};

/// Find one path using the `[search]` section of `config`
pub fn find_path<K: Debug>(
    graph: &Graph<K>,
    start: NodeId,
    destination: NodeId,
    config: &PathweaveConfig,
    heuristic: Option<&dyn Heuristic<K>>,
) -> Result<PathResult> {
    let settings = &config.search;
    if settings.is_customized() {
        tracing::debug!(algorithm = %settings.algorithm, "search switches overridden");
    }
    solve(graph, start, destination, &settings.search_config(), heuristic)
}

/// Find disjoint paths using the `[disjoint]` section of `config`
pub fn find_disjoint_paths<K: Debug>(
    graph: &Graph<K>,
    start: NodeId,
    destination: NodeId,
    config: &PathweaveConfig,
    heuristic: Option<&dyn Heuristic<K>>,
) -> Result<Vec<PathResult>> {
    config.validate()?;
    let settings = &config.disjoint;
    disjoint_paths(
        graph,
        start,
        destination,
        settings.paths,
        settings.mode,
        heuristic,
    )
}
