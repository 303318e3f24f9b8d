//! Pathweave
//!
//! Shortest paths and k disjoint paths over weighted directed graphs.
//!
//! ```rust,ignore
//! use pathweave::{search, Algorithm, Graph};
//!
//! let mut g = Graph::new();
//! let a = g.add_node("A", 0)?;
//! let b = g.add_node("B", 0)?;
//! g.add_edge(a, b, Some("AB"), 1)?;
//! let result = search(&g, a, b, Algorithm::Dijkstra, None)?;
//! assert_eq!(result.hops, vec![a, b]);
//! ```

pub use pathweave_core::config::{
    DisjointConfig, LoggingConfig, PathweaveConfig, SearchSettings, CONFIG_FILE_NAME,
};
pub use pathweave_core::error::{PathError, Result};
pub use pathweave_core::graph::{
    bhandari, disjoint_paths, find_disjoint_paths, find_path, path_is_consistent, search,
    shortest_path_tree, solve, suurballe, Algorithm, Cost, Disjointness, Edge, EdgeId, EdgeRef,
    EdgeView, Graph, Heuristic, Node, NodeId, PathResult, PlainView, QueueDiscipline,
    SearchConfig, SearchTree, Step,
};
pub use pathweave_core::logging::{init_from_config, init_tracing};
