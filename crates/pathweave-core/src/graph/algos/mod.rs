//! Path-finding algorithm implementations
//!
//! - `search`: the generic label-correcting engine and its named variants
//! - `disjoint`: k edge-disjoint (Bhandari) and node-disjoint (Suurballe) paths
//! - `shared`: path assembly helpers used by both

pub mod disjoint;
pub mod search;
pub mod shared;

#[cfg(test)]
pub mod fixtures;

pub use disjoint::{bhandari, disjoint_paths, suurballe};
pub use search::{search, shortest_path_tree, solve, Heuristic, SearchTree};
pub use shared::path_is_consistent;
