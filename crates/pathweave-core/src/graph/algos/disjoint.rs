//! k disjoint paths by repeated search over a residual view
//!
//! Each round suppresses the edges of the paths found so far and exposes
//! their inverses, runs a Bellman-Ford style search (inverse edges carry
//! negative weights), then untangles the new path against the old ones.
//! Edge-disjoint mode is Bhandari's algorithm; node-disjoint mode adds
//! Suurballe's rule that entering an interior node of an accepted path must
//! immediately cancel back along that path.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::Debug;
use std::time::Instant;

use crate::error::{PathError, Result};
use crate::graph::algos::search::{grow_tree, Heuristic};
use crate::graph::algos::shared::{build_path, into_plain_edges};
use crate::graph::model::Graph;
use crate::graph::synthetic::EdgeRef;
use crate::graph::traversal::EdgeView;
use crate::graph::types::{Algorithm, Disjointness, EdgeId, NodeId, PathResult};

/// The graph minus the edges of accepted paths, plus their inverses
#[derive(Debug, Default)]
struct ResidualView {
    used: HashSet<EdgeId>,
    /// Inverse edges keyed by the node they leave from
    inverse_at: HashMap<NodeId, Vec<EdgeId>>,
    node_disjoint: bool,
}

impl ResidualView {
    fn new<K>(
        graph: &Graph<K>,
        paths: &[Vec<EdgeRef>],
        destination: NodeId,
        node_disjoint: bool,
    ) -> Self {
        let mut view = ResidualView {
            node_disjoint,
            ..Default::default()
        };
        for edge in paths.iter().flatten() {
            let id = edge.edge_id();
            view.used.insert(id);
            // The destination is shared by every path
            let hop = graph.edge(id).destination();
            if hop != destination {
                view.inverse_at.entry(hop).or_default().push(id);
            }
        }
        view
    }
}

impl EdgeView for ResidualView {
    fn candidate_edges<K>(&self, graph: &Graph<K>, node: NodeId) -> Vec<EdgeRef> {
        let mut edges: Vec<EdgeRef> = graph
            .outgoing(node)
            .iter()
            .filter(|id| {
                let free = !self.used.contains(*id);
                if !free {
                    tracing::trace!(edge = id.index(), "skip edge already in use");
                }
                free
            })
            .map(|&id| EdgeRef::Plain(id))
            .collect();
        if let Some(inverses) = self.inverse_at.get(&node) {
            tracing::trace!(node = node.index(), count = inverses.len(), "add inverse edges");
            edges.extend(inverses.iter().map(|&id| EdgeRef::Inverse(id)));
        }
        edges
    }

    fn forced_continuation<K>(&self, graph: &Graph<K>, edge: EdgeRef) -> Option<EdgeRef> {
        if !self.node_disjoint || edge.is_inverse() {
            return None;
        }
        self.inverse_at
            .get(&edge.destination(graph))
            .and_then(|inverses| inverses.first())
            .map(|&id| EdgeRef::Inverse(id))
    }
}

/// First path and position holding `edge` as a forward edge
fn locate(paths: &[Vec<EdgeRef>], edge: EdgeId) -> Option<(usize, usize)> {
    paths.iter().enumerate().find_map(|(l, path)| {
        path.iter()
            .position(|&e| e == EdgeRef::Plain(edge))
            .map(|j| (l, j))
    })
}

/// Remove every inverse edge from the newest path by swapping tails with the
/// path that holds the cancelled forward edge.
///
/// Returns the indices of all paths that changed.
///
/// # Panics
///
/// Panics if an inverse edge cancels an edge that no path holds.
fn untangle(paths: &mut [Vec<EdgeRef>]) -> BTreeSet<usize> {
    let k = paths.len() - 1;
    let mut dirty = BTreeSet::from([k]);

    for i in (0..paths[k].len()).rev() {
        let EdgeRef::Inverse(cancelled) = paths[k][i] else {
            continue;
        };
        let Some((l, j)) = locate(paths, cancelled) else {
            panic!("edge #{} is cancelled but not part of any path", cancelled.index());
        };
        tracing::debug!(paths = ?(l, k), edge = cancelled.index(), "untangle");
        dirty.insert(l);

        // Both tails come from the paths as they were before this swap,
        // which also covers l == k
        let new_k: Vec<EdgeRef> = paths[k][..i]
            .iter()
            .chain(&paths[l][j + 1..])
            .copied()
            .collect();
        let new_l: Vec<EdgeRef> = paths[l][..j]
            .iter()
            .chain(&paths[k][i + 1..])
            .copied()
            .collect();
        paths[l] = new_l;
        paths[k] = new_k;
    }
    dirty
}

/// Find `k` disjoint paths from `start` to `destination` with minimal total
/// cost.
///
/// Every result carries the iterations of all rounds together. Fails with
/// `NoPath` (carrying `k`) when fewer than `k` disjoint paths exist.
///
/// The heuristic only orders the frontier; the search never stops at the
/// first pop because inverse edges have negative weights.
#[tracing::instrument(skip_all, fields(start = %graph.node_label(start), destination = %graph.node_label(destination), k = k, mode = ?mode))]
pub fn disjoint_paths<K: Debug>(
    graph: &Graph<K>,
    start: NodeId,
    destination: NodeId,
    k: usize,
    mode: Disjointness,
    heuristic: Option<&dyn Heuristic<K>>,
) -> Result<Vec<PathResult>> {
    graph.check(start)?;
    graph.check(destination)?;

    let config = Algorithm::BellmanFord.config();
    let node_disjoint = mode == Disjointness::Node;
    let started = Instant::now();
    let mut paths: Vec<Vec<EdgeRef>> = Vec::with_capacity(k);
    let mut iterations = 0;

    for round in 0..k {
        let view = ResidualView::new(graph, &paths, destination, node_disjoint);
        let tree = grow_tree(graph, &view, start, Some(destination), &config, heuristic);
        iterations += tree.iterations();

        if !tree.reaches(destination) {
            tracing::debug!(found = round, iterations, "not enough disjoint paths");
            return Err(PathError::no_paths(
                graph.node_label(start),
                graph.node_label(destination),
                k,
            ));
        }
        paths.push(tree.trace(graph, destination));

        let dirty = untangle(&mut paths);
        for &l in dirty.iter().filter(|&&l| l != round) {
            tracing::debug!(path = l, hops = %describe_hops(graph, start, &paths[l]), "reroute");
        }
        tracing::debug!(path = round, hops = %describe_hops(graph, start, &paths[round]), "found");
    }
    crate::trace_time!(started, "disjoint search");

    Ok(paths
        .into_iter()
        .map(|path| build_path(graph, start, into_plain_edges(path), iterations))
        .collect())
}

fn describe_hops<K: Debug>(graph: &Graph<K>, start: NodeId, path: &[EdgeRef]) -> String {
    std::iter::once(start)
        .chain(path.iter().map(|edge| edge.destination(graph)))
        .map(|node| graph.node_label(node))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Edge-disjoint k shortest paths (Bhandari)
pub fn bhandari<K: Debug>(
    graph: &Graph<K>,
    start: NodeId,
    destination: NodeId,
    k: usize,
) -> Result<Vec<PathResult>> {
    disjoint_paths(graph, start, destination, k, Disjointness::Edge, None)
}

/// Node-disjoint k shortest paths (Suurballe)
pub fn suurballe<K: Debug>(
    graph: &Graph<K>,
    start: NodeId,
    destination: NodeId,
    k: usize,
) -> Result<Vec<PathResult>> {
    disjoint_paths(graph, start, destination, k, Disjointness::Node, None)
}
