//! Graphs shared by the search and disjoint-path tests

use crate::graph::model::{Graph, Node};
use crate::graph::types::{Cost, NodeId};

pub type Grid = Graph<(i32, i32)>;

/// 5x5 grid with unit edges to the four neighbours, from (0, 2) to (4, 2).
///
/// Edges are labelled with the compass direction they point to.
pub fn five_by_five() -> (Grid, NodeId, NodeId) {
    let mut g = Graph::new();
    for i in 0..5 {
        for j in 0..5 {
            let node = g.add_node((i, j), 0).unwrap();
            if let Ok(north) = g.get_node(&(i - 1, j)) {
                g.add_edge(node, north, Some("N"), 1).unwrap();
                g.add_edge(north, node, Some("S"), 1).unwrap();
            }
            if let Ok(west) = g.get_node(&(i, j - 1)) {
                g.add_edge(node, west, Some("W"), 1).unwrap();
                g.add_edge(west, node, Some("E"), 1).unwrap();
            }
        }
    }
    let start = g.get_node(&(0, 2)).unwrap();
    let destination = g.get_node(&(4, 2)).unwrap();
    (g, start, destination)
}

/// Lower bound of the grid distance between two nodes
pub fn manhattan(node: &Node<(i32, i32)>, destination: &Node<(i32, i32)>) -> Cost {
    match (node.key(), destination.key()) {
        (Some(a), Some(b)) => Cost::from((a.0 - b.0).abs() + (a.1 - b.1).abs()),
        _ => Cost::ZERO,
    }
}

fn link(g: &mut Graph<char>, from: char, to: char, weight: i32) {
    let a = g.get_node(&from).unwrap();
    let b = g.get_node(&to).unwrap();
    let label = format!("{}{}", from, to);
    if weight < 0 {
        // one-way with a positive way back, so no negative cycle exists
        let back = format!("{}{}", to, from);
        g.add_edge(a, b, Some(label.as_str()), weight).unwrap();
        g.add_edge(b, a, Some(back.as_str()), -weight).unwrap();
    } else {
        g.add_bidirectional_edge(a, b, Some(label.as_str()), weight).unwrap();
    }
}

/// Two routes from A to H that cross at D:
///
/// ```text
///   B--C
///  /    \
/// A--E---D--H
///     \ /  /
///      F--G
/// ```
pub fn two_paths(ef_weight: i32, cd_weight: i32, df_weight: i32) -> (Graph<char>, NodeId, NodeId) {
    let mut g = Graph::new();
    for key in "ABCDEFGH".chars() {
        g.add_node(key, 0).unwrap();
    }
    link(&mut g, 'A', 'B', 1);
    link(&mut g, 'A', 'E', 1);
    link(&mut g, 'B', 'C', 1);
    link(&mut g, 'C', 'D', cd_weight);
    link(&mut g, 'D', 'E', 1);
    link(&mut g, 'D', 'F', df_weight);
    link(&mut g, 'D', 'H', 1);
    link(&mut g, 'E', 'F', ef_weight);
    link(&mut g, 'F', 'G', 1);
    link(&mut g, 'G', 'H', 1);
    let start = g.get_node(&'A').unwrap();
    let destination = g.get_node(&'H').unwrap();
    (g, start, destination)
}

/// Two disjoint routes from A to P that a greedy first path tangles:
///
/// ```text
///   B---C       M---N---O
///  /     \     /         \
/// A---E---D---L---K---J---P
///      \             /
///       F---G---H---I
/// ```
pub fn two_intertwined_paths() -> (Graph<char>, NodeId, NodeId) {
    let mut g = Graph::new();
    for key in "ABCDEFGHIJKLMNOP".chars() {
        g.add_node(key, 0).unwrap();
    }
    for pair in [
        "AB", "AE", "BC", "CD", "DE", "DL", "EF", "FG", "GH", "HI", "IJ", "JK", "JP", "KL", "LM",
        "MN", "NO", "OP",
    ] {
        add_pair(&mut g, pair);
    }
    let start = g.get_node(&'A').unwrap();
    let destination = g.get_node(&'P').unwrap();
    (g, start, destination)
}

/// Add a unit bidirectional edge between the two nodes named by `pair`
pub fn add_pair(g: &mut Graph<char>, pair: &str) {
    let mut keys = pair.chars();
    let (Some(from), Some(to)) = (keys.next(), keys.next()) else {
        panic!("pair needs two node keys: {}", pair);
    };
    link(g, from, to, 1);
}

pub fn hop_string(g: &Graph<char>, hops: &[NodeId]) -> String {
    hops.iter()
        .filter_map(|&id| g.node(id).key())
        .collect()
}

pub fn label_string<K>(g: &Graph<K>, result: &crate::graph::types::PathResult) -> String {
    result.edge_labels(g).concat()
}
