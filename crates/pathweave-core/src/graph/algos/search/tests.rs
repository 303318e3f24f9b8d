use super::*;
use crate::graph::algos::fixtures::{
    five_by_five, hop_string, label_string, manhattan, two_paths,
};
use crate::graph::algos::shared::path_is_consistent;
use crate::graph::types::{Algorithm, Cost};

fn column_two(g: &Graph<(i32, i32)>, result: &PathResult) -> bool {
    let keys: Vec<(i32, i32)> = result.hop_keys(g).into_iter().flatten().copied().collect();
    keys == vec![(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]
}

#[test]
fn test_default_search_on_grid() {
    let (g, s, d) = five_by_five();
    let result = solve(&g, s, d, &SearchConfig::default(), None).unwrap();
    assert_eq!(result.start(), s);
    assert_eq!(result.destination(), d);
    assert_eq!(result.path.len() as f64, result.cost.value());
    assert_eq!(result.hops.len() as f64, result.cost.value() + 1.0);
    assert!(path_is_consistent(&g, &result));
}

#[test]
fn test_default_search_on_two_paths() {
    let (g, s, d) = two_paths(1, 1, 1);
    let result = solve(&g, s, d, &SearchConfig::default(), None).unwrap();
    assert_eq!(result.hops[0], s);
    assert_eq!(result.destination(), d);
    assert_eq!(result.hops.len() as f64, result.cost.value() + 1.0);
    assert!(path_is_consistent(&g, &result));
}

#[test]
fn test_node_weights_count_toward_cost() {
    let mut g: Graph<&str> = Graph::new();
    let s = g.add_node("S", 1).unwrap();
    let d = g.add_node("D", 1).unwrap();
    let e = g.add_edge(s, d, None, 2).unwrap();
    let result = search(&g, s, d, Algorithm::Dijkstra, None).unwrap();
    assert_eq!(result.path, vec![e]);
    assert_eq!(result.hops, vec![s, d]);
    assert_eq!(result.cost, Cost::from(4));
}

#[test]
fn test_single_node_path() {
    let mut g: Graph<&str> = Graph::new();
    let s = g.add_node("S", 0).unwrap();
    let result = search(&g, s, s, Algorithm::Dijkstra, None).unwrap();
    assert!(result.path.is_empty());
    assert_eq!(result.hops, vec![s]);
    assert_eq!(result.cost, Cost::ZERO);
}

#[test]
fn test_unreachable_destination() {
    let mut g: Graph<&str> = Graph::new();
    let a = g.add_node("A", 0).unwrap();
    let b = g.add_node("B", 0).unwrap();
    g.add_edge(b, a, None, 1).unwrap();

    for algorithm in Algorithm::ALL {
        let err = search(&g, a, b, algorithm, None).unwrap_err();
        assert!(err.is_no_path());
        assert_eq!(err.to_string(), "no path exists between \"A\" and \"B\"");
    }
}

#[test]
fn test_foreign_node_rejected() {
    let (g, s, _) = five_by_five();
    let err = search(&g, s, NodeId(99), Algorithm::Dijkstra, None).unwrap_err();
    assert!(matches!(err, PathError::UnknownNode { id: 99 }));
}

#[test]
fn test_bfs_grid() {
    let (g, s, d) = five_by_five();
    let result = search(&g, s, d, Algorithm::BreadthFirst, None).unwrap();
    assert_eq!(label_string(&g, &result), "SSSS");
    assert!(column_two(&g, &result));
    assert_eq!(result.cost, Cost::from(4));
    assert!((15..=19).contains(&result.iterations));
}

#[test]
fn test_bfs_ignores_weights() {
    let (g, s, d) = two_paths(2, 1, 1);
    let result = search(&g, s, d, Algorithm::BreadthFirst, None).unwrap();
    assert_eq!(hop_string(&g, &result.hops), "AEDH");
    assert_eq!(result.cost, Cost::from(3));
    assert!((7..=8).contains(&result.iterations));
}

#[test]
fn test_dfs_grid() {
    let (g, s, d) = five_by_five();
    let result = search(&g, s, d, Algorithm::DepthFirst, None).unwrap();
    assert!(result.cost >= Cost::from(4));
    assert!(result.iterations <= 25);
    assert!(path_is_consistent(&g, &result));
}

#[test]
fn test_dfs_two_paths() {
    let (g, s, d) = two_paths(2, 1, 1);
    let result = search(&g, s, d, Algorithm::DepthFirst, None).unwrap();
    let hops = hop_string(&g, &result.hops);
    assert!(
        ["AEDH", "ABCDH", "AEFGH", "AEFDH", "AEDFGH", "ABCDFGH", "ABCDEFGH"]
            .contains(&hops.as_str()),
        "unexpected route {}",
        hops
    );
    assert!(result.cost >= Cost::from(3));
    assert!(result.iterations <= 8);
}

#[test]
fn test_dijkstra_grid() {
    let (g, s, d) = five_by_five();
    let result = search(&g, s, d, Algorithm::Dijkstra, None).unwrap();
    assert_eq!(label_string(&g, &result), "SSSS");
    assert!(column_two(&g, &result));
    assert_eq!(result.cost, Cost::from(4));
    assert!((15..=19).contains(&result.iterations));
}

#[test]
fn test_dijkstra_two_paths() {
    let (g, s, d) = two_paths(1, 1, 1);
    let result = search(&g, s, d, Algorithm::Dijkstra, None).unwrap();
    assert_eq!(hop_string(&g, &result.hops), "AEDH");
    assert_eq!(result.cost, Cost::from(3));
    assert!((7..=8).contains(&result.iterations));
}

#[test]
fn test_dijkstra_skips_expensive_branch() {
    // F and G are never expanded
    let (g, s, d) = two_paths(2, 1, 1);
    let result = search(&g, s, d, Algorithm::Dijkstra, None).unwrap();
    assert_eq!(hop_string(&g, &result.hops), "AEDH");
    assert_eq!(result.cost, Cost::from(3));
    assert_eq!(result.iterations, 6);
}

#[test]
fn test_bellman_ford_grid_expands_everything() {
    let (g, s, d) = five_by_five();
    let result = search(&g, s, d, Algorithm::BellmanFord, None).unwrap();
    assert_eq!(label_string(&g, &result), "SSSS");
    assert!(column_two(&g, &result));
    assert_eq!(result.cost, Cost::from(4));
    assert_eq!(result.iterations, 25);
}

#[test]
fn test_bellman_ford_two_paths() {
    let (g, s, d) = two_paths(1, 1, 1);
    let result = search(&g, s, d, Algorithm::BellmanFord, None).unwrap();
    assert_eq!(hop_string(&g, &result.hops), "AEDH");
    assert_eq!(result.cost, Cost::from(3));
    assert_eq!(result.iterations, 8);
}

#[test]
fn test_bellman_ford_negative_edge() {
    let (g, s, d) = two_paths(-1, 1, 1);
    let result = search(&g, s, d, Algorithm::BellmanFord, None).unwrap();
    let hops = hop_string(&g, &result.hops);
    assert!(hops == "AEFGH" || hops == "AEFDH", "unexpected route {}", hops);
    assert_eq!(result.cost, Cost::from(2));
    assert_eq!(result.iterations, 8);
}

#[test]
fn test_bellman_ford_reinserts_improved_nodes() {
    // D is expanded twice once the cheaper route through C is found
    let (g, s, d) = two_paths(-1, -2, 1);
    let result = search(&g, s, d, Algorithm::BellmanFord, None).unwrap();
    assert_eq!(hop_string(&g, &result.hops), "ABCDH");
    assert_eq!(result.cost, Cost::from(1));
    assert!((9..=10).contains(&result.iterations));
}

#[test]
fn test_astar_grid_goes_straight_down() {
    let (g, s, d) = five_by_five();
    let result = search(&g, s, d, Algorithm::AStar, Some(&manhattan)).unwrap();
    assert_eq!(label_string(&g, &result), "SSSS");
    assert!(column_two(&g, &result));
    assert_eq!(result.cost, Cost::from(4));
    assert_eq!(result.iterations, 5);
}

#[test]
fn test_astar_without_heuristic_matches_dijkstra() {
    let (g, s, d) = five_by_five();
    let astar = search(&g, s, d, Algorithm::AStar, None).unwrap();
    let dijkstra = search(&g, s, d, Algorithm::Dijkstra, None).unwrap();
    assert_eq!(astar, dijkstra);
}

#[test]
fn test_closure_heuristic() {
    let (g, s, d) = five_by_five();
    let rows_only = |node: &Node<(i32, i32)>, dest: &Node<(i32, i32)>| match (node.key(), dest.key()) {
        (Some(a), Some(b)) => Cost::from((a.0 - b.0).abs()),
        _ => Cost::ZERO,
    };
    let result = search(&g, s, d, Algorithm::AStar, Some(&rows_only)).unwrap();
    assert_eq!(result.cost, Cost::from(4));
    assert!(result.iterations <= 19);
}

#[test]
fn test_equal_cost_keeps_first_label() {
    // A -> B -> D and A -> C -> D tie; the LIFO pop expands C first
    let mut g: Graph<char> = Graph::new();
    let a = g.add_node('A', 0).unwrap();
    let b = g.add_node('B', 0).unwrap();
    let c = g.add_node('C', 0).unwrap();
    let d = g.add_node('D', 0).unwrap();
    g.add_edge(a, b, None, 1).unwrap();
    g.add_edge(a, c, None, 1).unwrap();
    g.add_edge(b, d, None, 1).unwrap();
    g.add_edge(c, d, None, 1).unwrap();

    let dijkstra = search(&g, a, d, Algorithm::Dijkstra, None).unwrap();
    assert_eq!(hop_string(&g, &dijkstra.hops), "ACD");

    let bfs = search(&g, a, d, Algorithm::BreadthFirst, None).unwrap();
    assert_eq!(hop_string(&g, &bfs.hops), "ABD");
}

#[test]
fn test_frontier_never_holds_duplicates() {
    let mut frontier = Frontier::default();
    frontier.push(NodeId(1));
    frontier.push(NodeId(2));
    frontier.push(NodeId(1));
    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(QueueDiscipline::Fifo), Some(NodeId(1)));
    frontier.push(NodeId(1));
    assert_eq!(frontier.pop(QueueDiscipline::Lifo), Some(NodeId(1)));
    assert_eq!(frontier.pop(QueueDiscipline::Lifo), Some(NodeId(2)));
    assert!(frontier.is_empty());
}

#[test]
fn test_frontier_sort_is_stable_and_descending() {
    let mut frontier = Frontier::default();
    let estimates: HashMap<NodeId, Cost> = [
        (NodeId(0), Cost::from(2)),
        (NodeId(1), Cost::from(5)),
        (NodeId(2), Cost::from(2)),
        (NodeId(3), Cost::from(1)),
    ]
    .into_iter()
    .collect();
    for i in 0..4 {
        frontier.push(NodeId(i));
    }
    frontier.sort_by_estimate(&estimates);
    let order: Vec<NodeId> = frontier.queue.iter().copied().collect();
    assert_eq!(order, vec![NodeId(1), NodeId(0), NodeId(2), NodeId(3)]);
}

#[test]
fn test_shortest_path_tree_labels_whole_grid() {
    let (g, s, _) = five_by_five();
    let tree = shortest_path_tree(&g, s, &Algorithm::Dijkstra.config()).unwrap();
    assert_eq!(tree.start(), s);
    assert_eq!(tree.len(), 25);
    assert_eq!(tree.iterations(), 25);
    for (id, node) in g.nodes() {
        let (row, col) = *node.key().unwrap();
        let expected = Cost::from(row + (col - 2).abs());
        assert_eq!(tree.cost_to(id), Some(expected), "cost to {:?}", (row, col));
    }

    let corner = g.get_node(&(4, 4)).unwrap();
    let path = tree.path_to(&g, corner).unwrap();
    assert_eq!(path.cost, Cost::from(6));
    assert!(path_is_consistent(&g, &path));
}

#[test]
fn test_shortest_path_tree_unreached_node() {
    let mut g: Graph<&str> = Graph::new();
    let a = g.add_node("A", 0).unwrap();
    let b = g.add_node("B", 0).unwrap();
    let tree = shortest_path_tree(&g, a, &SearchConfig::default()).unwrap();
    assert!(tree.reaches(a));
    assert!(!tree.reaches(b));
    assert_eq!(tree.cost_to(b), None);
    assert!(tree.path_to(&g, b).unwrap_err().is_no_path());
}

#[test]
#[should_panic(expected = "appears twice")]
fn test_trace_rejects_cycles() {
    let mut g: Graph<char> = Graph::new();
    let a = g.add_node('A', 0).unwrap();
    let b = g.add_node('B', 0).unwrap();
    let ab = g.add_edge(a, b, None, 1).unwrap();
    let ba = g.add_edge(b, a, None, 1).unwrap();
    let tree = SearchTree {
        start: a,
        best_costs: HashMap::new(),
        predecessors: [
            (a, Some(Step::Single(EdgeRef::Plain(ba)))),
            (b, Some(Step::Single(EdgeRef::Plain(ab)))),
        ]
        .into_iter()
        .collect(),
        iterations: 0,
    };
    tree.trace(&g, b);
}
