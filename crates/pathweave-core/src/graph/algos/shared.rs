use crate::graph::model::Graph;
use crate::graph::synthetic::EdgeRef;
use crate::graph::types::{Cost, EdgeId, NodeId, PathResult};

/// Strip the `Plain` tag from a traced path.
///
/// # Panics
///
/// Panics if an inverse edge is still present; callers only pass paths that
/// never contained one or that have been untangled.
pub fn into_plain_edges(edges: Vec<EdgeRef>) -> Vec<EdgeId> {
    edges
        .into_iter()
        .map(|edge| match edge {
            EdgeRef::Plain(id) => id,
            EdgeRef::Inverse(id) => {
                panic!("inverse of edge #{} left in a final path", id.index())
            }
        })
        .collect()
}

/// Hops through `edges` from `start`
pub fn hops_along<K>(graph: &Graph<K>, start: NodeId, edges: &[EdgeId]) -> Vec<NodeId> {
    std::iter::once(start)
        .chain(edges.iter().map(|&id| graph.edge(id).destination()))
        .collect()
}

/// Edge weights plus node weights along the hops
pub fn path_cost<K>(graph: &Graph<K>, edges: &[EdgeId], hops: &[NodeId]) -> Cost {
    let edge_cost: Cost = edges.iter().map(|&id| graph.edge(id).weight()).sum();
    let node_cost: Cost = hops.iter().map(|&id| graph.node(id).weight()).sum();
    edge_cost + node_cost
}

/// Build final PathResult from an edge sequence starting at `start`
pub fn build_path<K>(
    graph: &Graph<K>,
    start: NodeId,
    edges: Vec<EdgeId>,
    iterations: usize,
) -> PathResult {
    let hops = hops_along(graph, start, &edges);
    let cost = path_cost(graph, &edges, &hops);
    PathResult {
        path: edges,
        hops,
        cost,
        iterations,
    }
}

/// Check that hops and edges line up and that the cost adds up
pub fn path_is_consistent<K>(graph: &Graph<K>, result: &PathResult) -> bool {
    if result.hops.len() != result.path.len() + 1 {
        return false;
    }
    let linked = result.path.iter().enumerate().all(|(i, &id)| {
        let edge = graph.edge(id);
        edge.source() == result.hops[i] && edge.destination() == result.hops[i + 1]
    });
    linked && path_cost(graph, &result.path, &result.hops) == result.cost
}
