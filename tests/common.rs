use pathweave::{Cost, Graph, Node, NodeId, PathResult};

pub type Grid = Graph<(i32, i32)>;

/// `size` x `size` grid of unit edges between orthogonal neighbours.
///
/// Edges carry the compass direction they point to as label.
#[allow(dead_code)]
pub fn grid(size: i32) -> Grid {
    let mut g = Graph::new();
    for i in 0..size {
        for j in 0..size {
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
    g
}

#[allow(dead_code)]
pub fn manhattan(node: &Node<(i32, i32)>, destination: &Node<(i32, i32)>) -> Cost {
    match (node.key(), destination.key()) {
        (Some(a), Some(b)) => Cost::from((a.0 - b.0).abs() + (a.1 - b.1).abs()),
        _ => Cost::ZERO,
    }
}

/// Two routes from A to H crossing at D: A-B-C-D-H and A-E-F-G-H, plus
/// the cross links E-D and D-F.
#[allow(dead_code)]
pub fn two_routes(ef_weight: i32) -> (Graph<char>, NodeId, NodeId) {
    let mut g = Graph::new();
    for key in "ABCDEFGH".chars() {
        g.add_node(key, 0).unwrap();
    }
    for (pair, weight) in [
        ("AB", 1),
        ("AE", 1),
        ("BC", 1),
        ("CD", 1),
        ("DE", 1),
        ("DF", 1),
        ("DH", 1),
        ("EF", ef_weight),
        ("FG", 1),
        ("GH", 1),
    ] {
        let keys: Vec<char> = pair.chars().collect();
        let a = g.get_node(&keys[0]).unwrap();
        let b = g.get_node(&keys[1]).unwrap();
        g.add_bidirectional_edge(a, b, Some(pair), weight).unwrap();
    }
    let start = g.get_node(&'A').unwrap();
    let destination = g.get_node(&'H').unwrap();
    (g, start, destination)
}

#[allow(dead_code)]
pub fn route(g: &Graph<char>, result: &PathResult) -> String {
    result.hop_keys(g).into_iter().flatten().collect()
}
