//! Search-local edges derived from real graph edges
//!
//! The disjoint-path drivers never mutate the graph. They expose cancelled
//! edges as [`EdgeRef::Inverse`] and glue a step to a mandatory cancellation
//! with [`Step::Double`]. Both resolve their endpoints and weight against the
//! graph on demand.

use crate::graph::model::Graph;
use crate::graph::types::{Cost, EdgeId, NodeId};

/// A traversable edge: either a real graph edge or the inverse of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRef {
    Plain(EdgeId),
    /// Cancels `EdgeId`: runs from its destination to its source with
    /// negated weight
    Inverse(EdgeId),
}

impl EdgeRef {
    /// The underlying graph edge
    pub fn edge_id(self) -> EdgeId {
        match self {
            EdgeRef::Plain(id) | EdgeRef::Inverse(id) => id,
        }
    }

    pub fn is_inverse(self) -> bool {
        matches!(self, EdgeRef::Inverse(_))
    }

    pub fn source<K>(self, graph: &Graph<K>) -> NodeId {
        match self {
            EdgeRef::Plain(id) => graph.edge(id).source(),
            EdgeRef::Inverse(id) => graph.edge(id).destination(),
        }
    }

    pub fn destination<K>(self, graph: &Graph<K>) -> NodeId {
        match self {
            EdgeRef::Plain(id) => graph.edge(id).destination(),
            EdgeRef::Inverse(id) => graph.edge(id).source(),
        }
    }

    pub fn weight<K>(self, graph: &Graph<K>) -> Cost {
        match self {
            EdgeRef::Plain(id) => graph.edge(id).weight(),
            EdgeRef::Inverse(id) => -graph.edge(id).weight(),
        }
    }
}

/// One relaxation step recorded as a node's predecessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Single(EdgeRef),
    /// Two edges taken as one atomic step; `first` ends where `second` starts
    Double { first: EdgeRef, second: EdgeRef },
}

impl Step {
    /// Compose two consecutive edges.
    ///
    /// # Panics
    ///
    /// Panics if `first` does not end where `second` starts.
    pub fn double<K>(graph: &Graph<K>, first: EdgeRef, second: EdgeRef) -> Self {
        assert_eq!(
            first.destination(graph),
            second.source(graph),
            "double edge halves do not connect"
        );
        Step::Double { first, second }
    }

    pub fn source<K>(self, graph: &Graph<K>) -> NodeId {
        match self {
            Step::Single(edge) | Step::Double { first: edge, .. } => edge.source(graph),
        }
    }

    pub fn destination<K>(self, graph: &Graph<K>) -> NodeId {
        match self {
            Step::Single(edge) | Step::Double { second: edge, .. } => edge.destination(graph),
        }
    }

    /// Sum of the edge weights of the step. The weight of the node between
    /// the two halves of a double step is not included.
    pub fn weight<K>(self, graph: &Graph<K>) -> Cost {
        match self {
            Step::Single(edge) => edge.weight(graph),
            Step::Double { first, second } => first.weight(graph) + second.weight(graph),
        }
    }

    /// The constituent edges in traversal order
    pub fn edges(self) -> impl Iterator<Item = EdgeRef> {
        let (first, second) = match self {
            Step::Single(edge) => (edge, None),
            Step::Double { first, second } => (first, Some(second)),
        };
        std::iter::once(first).chain(second)
    }
}
