use super::*;
use crate::graph::types::WeightedEdge;

type Road = WeightedEdge<&'static str, u32>;

fn road(from: &'static str, to: &'static str, weight: u32) -> Road {
    WeightedEdge::new(from, to, weight)
}

fn city_graph() -> Graph<Road> {
    let mut graph = Graph::new();
    for edge in [
        road("Start", "A", 2),
        road("Start", "D", 8),
        road("A", "B", 6),
        road("A", "C", 2),
        road("C", "D", 2),
        road("D", "E", 3),
        road("C", "E", 9),
        road("E", "End", 1),
        road("B", "End", 5),
    ] {
        graph.add_edge(edge).unwrap();
    }
    graph
}

#[test]
fn test_dijkstra_distances() {
    let graph = city_graph();
    let result = ShortestPaths::compute(&graph, &"Start").unwrap();

    let distances: Vec<_> = result.distances().collect();
    assert_eq!(
        distances,
        vec![
            (&"Start", 0),
            (&"A", 2),
            (&"D", 6),
            (&"B", 8),
            (&"C", 4),
            (&"E", 9),
            (&"End", 10),
        ]
    );
}

#[test]
fn test_dijkstra_tree_in_vertex_order() {
    let graph = city_graph();
    let result = ShortestPaths::compute(&graph, &"Start").unwrap();

    let tree: Vec<_> = result.paths().cloned().collect();
    assert_eq!(
        tree,
        vec![
            road("Start", "A", 2),
            road("C", "D", 2),
            road("A", "B", 6),
            road("A", "C", 2),
            road("D", "E", 3),
            road("E", "End", 1),
        ]
    );
}

#[test]
fn test_path_to_end() {
    let graph = city_graph();
    let result = ShortestPaths::compute(&graph, &"Start").unwrap();

    let path = result.path_to(&"End").unwrap();
    assert_eq!(
        path,
        vec![
            road("Start", "A", 2),
            road("A", "C", 2),
            road("C", "D", 2),
            road("D", "E", 3),
            road("E", "End", 1),
        ]
    );
    let total: u64 = path.iter().map(|e| u64::from(e.weight())).sum();
    assert_eq!(Some(total), result.distance(&"End"));
}

#[test]
fn test_path_to_source_is_empty() {
    let graph = city_graph();
    let result = ShortestPaths::compute(&graph, &"Start").unwrap();
    assert!(result.path_to(&"Start").unwrap().is_empty());
    assert_eq!(result.source(), &"Start");
}

#[test]
fn test_unreachable_destination() {
    let mut graph = city_graph();
    graph.add_vertex("Island").unwrap();
    graph.add_edge(road("Island", "Start", 1)).unwrap();
    let result = ShortestPaths::compute(&graph, &"Start").unwrap();

    assert_eq!(result.distance(&"Island"), Some(INFINITY));
    assert!(!result.is_reachable(&"Island"));
    assert!(matches!(
        result.path_to(&"Island"),
        Err(GraphError::UnreachableDestination { .. })
    ));
}

#[test]
fn test_path_to_unknown_vertex() {
    let graph = city_graph();
    let result = ShortestPaths::compute(&graph, &"Start").unwrap();
    assert_eq!(result.distance(&"Nowhere"), None);
    assert!(matches!(
        result.path_to(&"Nowhere"),
        Err(GraphError::VertexNotFound { .. })
    ));
    assert!(matches!(
        result.path_to(&""),
        Err(GraphError::NullArgument { .. })
    ));
}

#[test]
fn test_source_checks() {
    let graph = city_graph();
    assert!(matches!(
        ShortestPaths::compute(&graph, &""),
        Err(GraphError::NullArgument { .. })
    ));
    assert!(matches!(
        ShortestPaths::compute(&graph, &"Nowhere"),
        Err(GraphError::VertexNotFound { .. })
    ));
}

#[test]
fn test_parallel_edges_pick_lightest() {
    let mut graph: Graph<Road> = Graph::new();
    graph.add_edge(road("s", "t", 9)).unwrap();
    graph.add_edge(road("s", "t", 4)).unwrap();
    graph.add_edge(road("s", "t", 6)).unwrap();
    let result = ShortestPaths::compute(&graph, &"s").unwrap();

    assert_eq!(result.distance(&"t"), Some(4));
    assert_eq!(result.path_to(&"t").unwrap(), vec![road("s", "t", 4)]);
}

/// A later improvement replaces the predecessor recorded by an earlier,
/// heavier relaxation.
#[test]
fn test_predecessor_replaced_on_improvement() {
    let mut graph: Graph<Road> = Graph::new();
    graph.add_edge(road("s", "x", 10)).unwrap();
    graph.add_edge(road("s", "y", 1)).unwrap();
    graph.add_edge(road("x", "t", 1)).unwrap();
    graph.add_edge(road("y", "t", 5)).unwrap();
    graph.add_edge(road("s", "t", 100)).unwrap();
    let result = ShortestPaths::compute(&graph, &"s").unwrap();

    // s→t(100) first, then y→t(5) improves to 6 with a lighter edge
    assert_eq!(result.distance(&"t"), Some(6));
    assert_eq!(
        result.path_to(&"t").unwrap(),
        vec![road("s", "y", 1), road("y", "t", 5)]
    );
}

#[test]
fn test_zero_weight_edges() {
    let mut graph: Graph<Road> = Graph::new();
    graph.add_edge(road("a", "b", 0)).unwrap();
    graph.add_edge(road("b", "c", 0)).unwrap();
    let result = ShortestPaths::compute(&graph, &"a").unwrap();
    assert_eq!(result.distance(&"c"), Some(0));
    assert_eq!(result.path_to(&"c").unwrap().len(), 2);
}

#[test]
fn test_result_ignores_later_mutation() {
    let mut graph = city_graph();
    let result = ShortestPaths::compute(&graph, &"Start").unwrap();
    graph.add_edge(road("Start", "End", 1)).unwrap();
    assert_eq!(result.distance(&"End"), Some(10));
}
