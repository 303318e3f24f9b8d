use crate::graph::model::Graph;
use crate::graph::synthetic::EdgeRef;
use crate::graph::types::NodeId;

/// Trait for providing the edges a search may follow.
///
/// The search engine never reads adjacency from the graph directly; a view
/// decides which edges leave a node and whether reaching a node forces an
/// immediate follow-up edge.
pub trait EdgeView {
    /// Candidate edges leaving `node`, in enumeration order
    fn candidate_edges<K>(&self, graph: &Graph<K>, node: NodeId) -> Vec<EdgeRef>;

    /// Edge that must be taken right after `edge`, if any.
    ///
    /// When this returns `Some`, the engine records the pair as a single
    /// double step instead of stopping at `edge`'s destination.
    fn forced_continuation<K>(&self, _graph: &Graph<K>, _edge: EdgeRef) -> Option<EdgeRef> {
        None
    }
}

/// The graph as built: every outgoing edge, no synthetic edges
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainView;

impl EdgeView for PlainView {
    fn candidate_edges<K>(&self, graph: &Graph<K>, node: NodeId) -> Vec<EdgeRef> {
        graph
            .outgoing(node)
            .iter()
            .map(|&id| EdgeRef::Plain(id))
            .collect()
    }
}
