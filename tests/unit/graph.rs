//! Graph construction and maximum clique.

use crate::common::{graph_from_edges, is_clique};
use keyclique::{build_graph, max_clique, SimilarityGraph};

#[test]
fn clique_of_two_disjoint_triangles_has_three_members() {
    let graph = graph_from_edges(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]);
    let clique = graph.max_clique();

    assert_eq!(clique.len(), 3);
    let ids: Vec<usize> = clique.members.iter().map(|m| m.parse().unwrap()).collect();
    assert!(is_clique(&graph.adjacency_matrix(), &ids));
}

#[test]
fn petersen_graph_has_no_triangle() {
    let outer = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)];
    let spokes = [(0, 5), (1, 6), (2, 7), (3, 8), (4, 9)];
    let inner = [(5, 7), (7, 9), (9, 6), (6, 8), (8, 5)];
    let edges: Vec<(usize, usize)> = outer.into_iter().chain(spokes).chain(inner).collect();
    let graph = graph_from_edges(10, &edges);

    assert_eq!(max_clique(&graph.adjacency_matrix()).len(), 2);
}

#[test]
fn pivot_heuristic_on_four_documents() {
    // docs[0] similar to 1 and 3; 1 and 3 similar to each other; 2 similar to nobody.
    let pairs = [("d0", "d1"), ("d0", "d3"), ("d1", "d3")];
    let similar = |a: &str, b: &str| pairs.iter().any(|&(x, y)| (x == a && y == b) || (x == b && y == a));
    let (graph, stats) = build_graph(&["d0", "d1", "d2", "d3"], similar);

    assert_eq!(stats.comparisons, 4);
    assert_eq!(stats.matches, 3);
    assert_eq!(graph.max_clique().members, vec!["d0", "d1", "d3"]);
}

#[test]
fn neighbours_and_degree() {
    let mut graph = SimilarityGraph::new();
    graph.add_edge("p", "a");
    graph.add_edge("p", "b");
    let p = graph.vertex("p").unwrap();

    assert_eq!(graph.degree(p), 2);
    let degrees: Vec<usize> = graph.vertices().map(|id| graph.degree(id)).collect();
    assert_eq!(degrees, vec![2, 1, 1]);
    let names: Vec<&str> = graph.neighbours(p).map(|id| graph.name(id)).collect();
    assert_eq!(names, vec!["a", "b"]);
}
