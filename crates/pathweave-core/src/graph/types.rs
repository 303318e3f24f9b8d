use serde::{Deserialize, Serialize};

/// Index of a node in its graph's node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of an edge in its graph's edge arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Cost of traversing nodes and edges.
///
/// Edge weights, node weights, accumulated path costs and heuristic bounds all
/// share this type. Weights may be negative; only negative cycles are
/// unsupported.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    /// Default weight of an edge
    pub const UNIT: Cost = Cost(1.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Ordering used by the frontier sort; incomparable values compare equal.
    pub(crate) fn order(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .partial_cmp(&other.0)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Cost {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::ops::Neg for Cost {
    type Output = Self;

    fn neg(self) -> Self {
        Cost(-self.0)
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, c| acc + c)
    }
}

impl From<i32> for Cost {
    fn from(cost: i32) -> Self {
        Cost(f64::from(cost))
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// End of the frontier a search pops from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueDiscipline {
    /// Pop the oldest entry (or the worst-ranked one when sorted)
    Fifo,
    #[default]
    /// Pop the newest entry (or the best-ranked one when sorted)
    Lifo,
}

/// Immutable switches of the generic label-correcting search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub queue: QueueDiscipline,
    /// Stop as soon as the destination is popped. Only optimal when no
    /// negative weights are reachable.
    pub stop_at_first_pop: bool,
    /// Stably sort the frontier by estimated total cost before every pop
    pub sort_frontier: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Algorithm::default().config()
    }
}

/// Named specializations of the generic search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "bfs", alias = "breadth-first")]
    BreadthFirst,
    #[serde(rename = "dfs", alias = "depth-first")]
    DepthFirst,
    #[default]
    #[serde(rename = "dijkstra")]
    Dijkstra,
    #[serde(rename = "bellman-ford")]
    BellmanFord,
    #[serde(rename = "a-star", alias = "astar")]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::AStar,
    ];

    /// The fixed search configuration this algorithm expands to
    ///
    /// | algorithm    | queue | stop  | sort |
    /// |--------------|-------|-------|------|
    /// | BFS          | FIFO  | first | no   |
    /// | DFS          | LIFO  | first | no   |
    /// | Dijkstra     | LIFO  | first | yes  |
    /// | Bellman-Ford | LIFO  | all   | yes  |
    /// | A*           | LIFO  | first | yes  |
    pub fn config(self) -> SearchConfig {
        let (queue, stop_at_first_pop, sort_frontier) = match self {
            Algorithm::BreadthFirst => (QueueDiscipline::Fifo, true, false),
            Algorithm::DepthFirst => (QueueDiscipline::Lifo, true, false),
            Algorithm::Dijkstra | Algorithm::AStar => (QueueDiscipline::Lifo, true, true),
            Algorithm::BellmanFord => (QueueDiscipline::Lifo, false, true),
        };
        SearchConfig {
            queue,
            stop_at_first_pop,
            sort_frontier,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::AStar => "a-star",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellmanford" => Ok(Algorithm::BellmanFord),
            "a-star" | "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(format!(
                "unknown algorithm '{}' (expected: bfs, dfs, dijkstra, bellman-ford, a-star)",
                other
            )),
        }
    }
}

/// Which kind of overlap k disjoint paths must avoid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disjointness {
    /// No shared edges (Bhandari)
    #[default]
    Edge,
    /// No shared interior nodes (Suurballe)
    Node,
}

/// A single path from start to destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Edges in traversal order
    pub path: Vec<EdgeId>,
    /// Nodes in traversal order, start and destination included
    pub hops: Vec<NodeId>,
    /// Sum of all edge weights and node weights along the path
    pub cost: Cost,
    /// Frontier pops performed by the search that produced this result
    pub iterations: usize,
}

impl PathResult {
    pub fn start(&self) -> NodeId {
        self.hops[0]
    }

    pub fn destination(&self) -> NodeId {
        self.hops[self.hops.len() - 1]
    }

    /// Number of edges in the path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// True for the zero-edge path from a node to itself
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Reference keys of the hops, `None` for keyless nodes
    pub fn hop_keys<'g, K>(&self, graph: &'g super::Graph<K>) -> Vec<Option<&'g K>> {
        self.hops.iter().map(|&id| graph.node(id).key()).collect()
    }

    /// Labels of the edges, empty for unlabelled edges
    pub fn edge_labels<'g, K>(&self, graph: &'g super::Graph<K>) -> Vec<&'g str> {
        self.path
            .iter()
            .map(|&id| graph.edge(id).label().unwrap_or(""))
            .collect()
    }
}
