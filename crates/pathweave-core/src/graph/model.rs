//! Arena-backed directed graph with weighted nodes and edges

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{PathError, Result};
use crate::graph::types::{Cost, EdgeId, NodeId};

/// A node (vertex) with an optional reference key and a traversal weight
#[derive(Debug, Clone, PartialEq)]
pub struct Node<K> {
    key: Option<K>,
    weight: Cost,
    edges: Vec<EdgeId>,
}

impl<K> Node<K> {
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Cost charged every time a path passes through this node
    pub fn weight(&self) -> Cost {
        self.weight
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

/// A unidirectional, weighted link between two nodes of the same graph
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: NodeId,
    destination: NodeId,
    label: Option<String>,
    weight: Cost,
}

impl Edge {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn weight(&self) -> Cost {
        self.weight
    }
}

/// A directed graph: an ordered list of nodes, each owning its outgoing edges.
///
/// Nodes and edges live in arenas and are addressed by [`NodeId`] and
/// [`EdgeId`]. Cloning a graph yields an independent deep copy with the same
/// structure, keys, labels and weights.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    nodes: Vec<Node<K>>,
    edges: Vec<Edge>,
    keys: HashMap<K, NodeId>,
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            keys: HashMap::new(),
        }
    }
}

impl<K> Graph<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Fail with `UnknownNode` unless `id` belongs to this graph
    pub fn check(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(PathError::UnknownNode { id: id.0 })
        }
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<K>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }

    /// All edges, grouped by source node in node order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.nodes
            .iter()
            .flat_map(|node| node.edges.iter())
            .map(|&id| (id, &self.edges[id.0]))
    }

    pub fn outgoing(&self, node: NodeId) -> &[EdgeId] {
        &self.nodes[node.0].edges
    }

    /// Destinations of the outgoing edges of `node`, in edge order
    pub fn neighbours(&self, node: NodeId) -> Vec<NodeId> {
        self.outgoing(node)
            .iter()
            .map(|&id| self.edges[id.0].destination)
            .collect()
    }

    /// Add an edge from `source` to `destination`
    pub fn add_edge(
        &mut self,
        source: NodeId,
        destination: NodeId,
        label: Option<&str>,
        weight: impl Into<Cost>,
    ) -> Result<EdgeId> {
        self.check(source)?;
        self.check(destination)?;

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source,
            destination,
            label: label.map(str::to_string),
            weight: weight.into(),
        });
        self.nodes[source.0].edges.push(id);
        Ok(id)
    }

    /// Add two independent edges, `a -> b` followed by `b -> a`
    pub fn add_bidirectional_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        label: Option<&str>,
        weight: impl Into<Cost>,
    ) -> Result<(EdgeId, EdgeId)> {
        let weight = weight.into();
        let forward = self.add_edge(a, b, label, weight)?;
        let backward = self.add_edge(b, a, label, weight)?;
        Ok((forward, backward))
    }
}

impl<K: Debug> Graph<K> {
    /// Short label for a node: its key's debug form, or `#index` without a key
    pub fn node_label(&self, id: NodeId) -> String {
        match self.nodes.get(id.0).and_then(|n| n.key.as_ref()) {
            Some(key) => format!("{:?}", key),
            None => format!("#{}", id.0),
        }
    }

    /// Render a node as `Node(key)` or `Node(key, weight)` when weighted
    pub fn describe_node(&self, id: NodeId) -> String {
        let node = self.node(id);
        if node.weight.is_zero() {
            format!("Node({})", self.node_label(id))
        } else {
            format!("Node({}, {})", self.node_label(id), node.weight)
        }
    }

    /// Render an edge as `Edge(src, dst, label)`, with the weight appended
    /// when it differs from the default of 1
    pub fn describe_edge(&self, id: EdgeId) -> String {
        let edge = self.edge(id);
        let label = edge.label.as_deref().unwrap_or("-");
        let mut out = format!(
            "Edge({}, {}, {}",
            self.node_label(edge.source),
            self.node_label(edge.destination),
            label
        );
        if edge.weight != Cost::UNIT {
            out.push_str(&format!(", {}", edge.weight));
        }
        out.push(')');
        out
    }
}

impl<K: Eq + Hash + Clone + Debug> Graph<K> {
    /// Add a node with an optional reference key.
    ///
    /// Keys are unique within a graph; reusing one fails with `AlreadyExists`.
    pub fn add_node(&mut self, key: impl Into<Option<K>>, weight: impl Into<Cost>) -> Result<NodeId> {
        let key = key.into();
        let id = NodeId(self.nodes.len());
        if let Some(key) = &key {
            if self.keys.contains_key(key) {
                return Err(PathError::already_exists("node", format!("{:?}", key)));
            }
            self.keys.insert(key.clone(), id);
        }
        self.nodes.push(Node {
            key,
            weight: weight.into(),
            edges: Vec::new(),
        });
        Ok(id)
    }

    /// Look up a node by reference key
    pub fn get_node<Q>(&self, key: &Q) -> Result<NodeId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        match self.keys.get(key) {
            Some(&id) => Ok(id),
            None => crate::bail_not_found!(key),
        }
    }

    /// Deep copy of the graph. Equivalent to `clone`.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}
