//! Pathweave Core Library
//!
//! Shortest paths and k disjoint paths over weighted directed graphs.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
