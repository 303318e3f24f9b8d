//! Generic label-correcting shortest path search
//!
//! One engine covers BFS, DFS, Dijkstra, Bellman-Ford and A*; the
//! [`SearchConfig`] switches pick the queue end, whether the frontier is
//! sorted and whether the search stops at the first pop of the destination.
//!
//! Tie-break: a node's label only changes on a strictly lower cost, so the
//! first path found among equals wins, and the frontier sort is stable. This
//! ordering is reproducible but otherwise arbitrary.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::time::Instant;

use crate::error::{PathError, Result};
use crate::graph::algos::shared::{build_path, into_plain_edges};
use crate::graph::model::{Graph, Node};
use crate::graph::synthetic::{EdgeRef, Step};
use crate::graph::traversal::{EdgeView, PlainView};
use crate::graph::types::{Algorithm, Cost, NodeId, PathResult, QueueDiscipline, SearchConfig};

/// Lower bound of the remaining cost from a node to the destination.
///
/// The bound must be admissible (never above the true remaining cost) for a
/// search that stops at the first pop to stay optimal. This is not checked.
pub trait Heuristic<K> {
    fn lower_bound(&self, node: &Node<K>, destination: &Node<K>) -> Cost;
}

impl<K, F> Heuristic<K> for F
where
    F: Fn(&Node<K>, &Node<K>) -> Cost,
{
    fn lower_bound(&self, node: &Node<K>, destination: &Node<K>) -> Cost {
        self(node, destination)
    }
}

/// Nodes waiting to be expanded, without duplicates
#[derive(Debug, Default)]
struct Frontier {
    queue: VecDeque<NodeId>,
    pending: HashSet<NodeId>,
}

impl Frontier {
    fn push(&mut self, node: NodeId) {
        if self.pending.insert(node) {
            self.queue.push_back(node);
        }
    }

    /// Stable sort, highest estimate first, so the best candidate sits at the back
    fn sort_by_estimate(&mut self, estimates: &HashMap<NodeId, Cost>) {
        self.queue
            .make_contiguous()
            .sort_by(|a, b| estimates[b].order(&estimates[a]));
    }

    fn pop(&mut self, discipline: QueueDiscipline) -> Option<NodeId> {
        let node = match discipline {
            QueueDiscipline::Lifo => self.queue.pop_back(),
            QueueDiscipline::Fifo => self.queue.pop_front(),
        }?;
        self.pending.remove(&node);
        Some(node)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Labels left behind by one search run.
///
/// Besides the path to the destination, the tree answers cost and path
/// queries for every node the search labelled.
#[derive(Debug, Clone)]
pub struct SearchTree {
    start: NodeId,
    best_costs: HashMap<NodeId, Cost>,
    predecessors: HashMap<NodeId, Option<Step>>,
    iterations: usize,
}

impl SearchTree {
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Frontier pops performed
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn reaches(&self, node: NodeId) -> bool {
        self.predecessors.contains_key(&node)
    }

    /// Best cost found from the start to `node`, node weights included
    pub fn cost_to(&self, node: NodeId) -> Option<Cost> {
        self.best_costs.get(&node).copied()
    }

    /// Number of labelled nodes, start included
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Edges from the start to `node`, double steps expanded.
    ///
    /// # Panics
    ///
    /// Panics if the predecessor chain repeats an edge.
    pub(crate) fn trace<K>(&self, graph: &Graph<K>, node: NodeId) -> Vec<EdgeRef> {
        let mut steps = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.predecessors.get(&node).copied().flatten();
        while let Some(step) = current {
            for edge in step.edges() {
                assert!(seen.insert(edge), "edge {:?} appears twice in a traced path", edge);
            }
            steps.push(step);
            current = self
                .predecessors
                .get(&step.source(graph))
                .copied()
                .flatten();
        }
        steps.reverse();
        steps.into_iter().flat_map(Step::edges).collect()
    }

    /// The path from the start to `node`, or `NoPath` if it was never reached
    pub fn path_to<K: Debug>(&self, graph: &Graph<K>, node: NodeId) -> Result<PathResult> {
        if !self.reaches(node) {
            return Err(PathError::no_path(
                graph.node_label(self.start),
                graph.node_label(node),
            ));
        }
        let edges = into_plain_edges(self.trace(graph, node));
        Ok(build_path(graph, self.start, edges, self.iterations))
    }
}

/// Mutable state of a single search invocation
struct SearchState<'a, K> {
    graph: &'a Graph<K>,
    destination: Option<NodeId>,
    heuristic: Option<&'a dyn Heuristic<K>>,
    best_costs: HashMap<NodeId, Cost>,
    estimates: HashMap<NodeId, Cost>,
    predecessors: HashMap<NodeId, Option<Step>>,
    frontier: Frontier,
}

impl<'a, K> SearchState<'a, K> {
    fn new(
        graph: &'a Graph<K>,
        start: NodeId,
        destination: Option<NodeId>,
        heuristic: Option<&'a dyn Heuristic<K>>,
    ) -> Self {
        let mut state = Self {
            graph,
            destination,
            heuristic,
            best_costs: HashMap::new(),
            estimates: HashMap::new(),
            predecessors: HashMap::new(),
            frontier: Frontier::default(),
        };
        let cost = graph.node(start).weight();
        state.best_costs.insert(start, cost);
        state.estimates.insert(start, cost + state.lower_bound(start));
        state.predecessors.insert(start, None);
        state.frontier.push(start);
        state
    }

    fn lower_bound(&self, node: NodeId) -> Cost {
        match (self.heuristic, self.destination) {
            (Some(h), Some(destination)) => {
                h.lower_bound(self.graph.node(node), self.graph.node(destination))
            }
            _ => Cost::ZERO,
        }
    }

    fn is_better(&self, node: NodeId, cost: Cost) -> bool {
        self.best_costs.get(&node).is_none_or(|&best| cost < best)
    }

    fn label(&mut self, node: NodeId, cost: Cost, step: Step) {
        tracing::trace!(node = node.index(), cost = cost.value(), "label");
        self.best_costs.insert(node, cost);
        self.estimates.insert(node, cost + self.lower_bound(node));
        self.predecessors.insert(node, Some(step));
        self.frontier.push(node);
    }

    /// Offer every candidate edge of `node` as a cheaper route to its end
    fn relax<V: EdgeView>(&mut self, view: &V, node: NodeId) {
        let graph = self.graph;
        let current = self.best_costs[&node];

        for edge in view.candidate_edges(graph, node) {
            let neighbour = edge.destination(graph);
            let cost = current + edge.weight(graph) + graph.node(neighbour).weight();
            if !self.is_better(neighbour, cost) {
                tracing::trace!(node = neighbour.index(), cost = cost.value(), "skip");
                continue;
            }

            match view.forced_continuation(graph, edge) {
                None => self.label(neighbour, cost, Step::Single(edge)),
                Some(next) => {
                    let step = Step::double(graph, edge, next);
                    let target = next.destination(graph);
                    let cost = cost + next.weight(graph) + graph.node(target).weight();
                    if self.is_better(target, cost) {
                        self.label(target, cost, step);
                    }
                }
            }
        }
    }
}

/// Run the label-correcting search from `start` over the edges `view` exposes.
///
/// Without a destination the search labels everything reachable and the
/// heuristic is ignored.
pub(crate) fn grow_tree<K, V: EdgeView>(
    graph: &Graph<K>,
    view: &V,
    start: NodeId,
    destination: Option<NodeId>,
    config: &SearchConfig,
    heuristic: Option<&dyn Heuristic<K>>,
) -> SearchTree {
    let mut state = SearchState::new(graph, start, destination, heuristic);
    let mut iterations = 0;

    while !state.frontier.is_empty() {
        iterations += 1;
        if config.sort_frontier {
            state.frontier.sort_by_estimate(&state.estimates);
        }
        let Some(node) = state.frontier.pop(config.queue) else {
            break;
        };
        tracing::trace!(
            iteration = iterations,
            node = node.index(),
            cost = state.best_costs[&node].value(),
            pending = state.frontier.len(),
            "pop"
        );

        // Continuing past the first pop keeps negative weights correct
        if config.stop_at_first_pop && Some(node) == destination {
            break;
        }
        state.relax(view, node);
    }

    tracing::debug!(
        iterations,
        labelled = state.predecessors.len(),
        "search finished"
    );

    SearchTree {
        start,
        best_costs: state.best_costs,
        predecessors: state.predecessors,
        iterations,
    }
}

/// Find a single path with an explicit search configuration.
///
/// Fails with `NoPath` when `destination` is unreachable and with
/// `UnknownNode` when either endpoint is not part of `graph`.
#[tracing::instrument(skip_all, fields(start = %graph.node_label(start), destination = %graph.node_label(destination), config = ?config))]
pub fn solve<K: Debug>(
    graph: &Graph<K>,
    start: NodeId,
    destination: NodeId,
    config: &SearchConfig,
    heuristic: Option<&dyn Heuristic<K>>,
) -> Result<PathResult> {
    graph.check(start)?;
    graph.check(destination)?;

    let started = Instant::now();
    let tree = grow_tree(graph, &PlainView, start, Some(destination), config, heuristic);
    crate::trace_time!(started, "search");

    tree.path_to(graph, destination)
}

/// Find a single path with one of the named algorithms.
///
/// The heuristic only matters for sorted searches; `AStar` without one
/// behaves exactly like `Dijkstra`.
pub fn search<K: Debug>(
    graph: &Graph<K>,
    start: NodeId,
    destination: NodeId,
    algorithm: Algorithm,
    heuristic: Option<&dyn Heuristic<K>>,
) -> Result<PathResult> {
    tracing::debug!(%algorithm, "search");
    solve(graph, start, destination, &algorithm.config(), heuristic)
}

/// Label every node reachable from `start`
#[tracing::instrument(skip_all, fields(start = %graph.node_label(start)))]
pub fn shortest_path_tree<K: Debug>(
    graph: &Graph<K>,
    start: NodeId,
    config: &SearchConfig,
) -> Result<SearchTree> {
    graph.check(start)?;
    Ok(grow_tree(graph, &PlainView, start, None, config, None))
}

#[cfg(test)]
mod tests;
