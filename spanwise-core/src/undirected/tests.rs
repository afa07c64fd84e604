//! Unit tests for undirected graphs and their spanning-tree algorithms.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

use crate::{
    error::GraphError,
    spanning::{SpanningForest, TreeEdge},
    test_utils::{brute_force_forest_weight, component_count, suite_proptest_config},
    vertex::{VertexId, Weight},
};

use super::UndirectedGraph;

type EdgeList = Vec<(VertexId, VertexId, Weight)>;

fn graph(vertex_count: usize, edges: &[(VertexId, VertexId, Weight)]) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new(vertex_count).expect("vertex count is positive");
    for &(first, second, weight) in edges {
        graph
            .insert_edge(first, second, weight)
            .expect("edge endpoints in range");
    }
    graph
}

fn record_sets(graph: &UndirectedGraph) -> Vec<HashSet<(VertexId, Weight)>> {
    (1..=graph.vertex_count())
        .map(|vertex| {
            graph
                .neighbours(vertex)
                .expect("vertex in range")
                .iter()
                .map(|edge| (edge.neighbour(), edge.weight()))
                .collect()
        })
        .collect()
}

fn as_triples(forest: &SpanningForest) -> Vec<(VertexId, VertexId, Weight)> {
    forest
        .edges()
        .iter()
        .map(|edge| (edge.tail(), edge.head(), edge.weight()))
        .collect()
}

/// Checks that `forest` is acyclic, uses only graph edges, and has one tree
/// per connected component of the graph.
fn check_forest(graph: &UndirectedGraph, forest: &SpanningForest) {
    let triples = as_triples(forest);
    for &(tail, head, weight) in &triples {
        assert_eq!(
            graph.neighbours(tail).expect("in range").weight_to(head),
            Some(weight),
            "forest edge ({tail}, {head}) must exist in the graph"
        );
    }
    let graph_edges: EdgeList = graph
        .canonical_edges()
        .map(|edge| (edge.tail(), edge.head(), edge.weight()))
        .collect();
    let expected_components = component_count(graph.vertex_count(), &graph_edges);

    assert_eq!(forest.component_count(), expected_components);
    assert_eq!(
        triples.len(),
        graph.vertex_count() - expected_components,
        "an acyclic forest has V - C edges"
    );
    assert_eq!(
        component_count(graph.vertex_count(), &triples),
        expected_components
    );
}

fn triangle() -> UndirectedGraph {
    graph(3, &[(1, 2, 1), (2, 3, 2), (1, 3, 4)])
}

#[test]
fn rejects_empty_graph() {
    assert!(matches!(
        UndirectedGraph::new(0),
        Err(GraphError::InvalidSize { got: 0 })
    ));
}

#[test]
fn insert_mirrors_edges_into_both_lists() {
    let mut graph = graph(3, &[(1, 2, 4)]);
    assert_eq!(graph.neighbours(2).expect("in range").weight_to(1), Some(4));

    graph.insert_edge(2, 1, 6).expect("in range");
    assert_eq!(graph.neighbours(1).expect("in range").weight_to(2), Some(6));
    assert_eq!(graph.neighbours(2).expect("in range").weight_to(1), Some(6));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn self_loops_are_stored_once() {
    let graph = graph(2, &[(1, 1, 3), (1, 2, 1)]);
    assert_eq!(graph.neighbours(1).expect("in range").len(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.canonical_edges().count(), 1);
}

#[rstest]
#[case::zero(0, 2)]
#[case::past_end(2, 4)]
fn mutations_reject_out_of_range_vertices(#[case] first: VertexId, #[case] second: VertexId) {
    let mut graph = triangle();
    let before = record_sets(&graph);

    assert!(matches!(
        graph.insert_edge(first, second, 1),
        Err(GraphError::InvalidVertex { vertex_count: 3, .. })
    ));
    assert!(matches!(
        graph.remove_edge(first, second),
        Err(GraphError::InvalidVertex { vertex_count: 3, .. })
    ));
    assert_eq!(record_sets(&graph), before);
}

#[test]
fn remove_edge_clears_both_directions() {
    let mut graph = triangle();
    graph.remove_edge(3, 1).expect("in range");
    assert_eq!(graph.neighbours(1).expect("in range").weight_to(3), None);
    assert_eq!(graph.neighbours(3).expect("in range").weight_to(1), None);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn prim_on_triangle_reports_edges_in_finish_order() {
    let forest = triangle().minimum_spanning_tree_prim();
    assert_eq!(as_triples(&forest), vec![(1, 2, 1), (2, 3, 2)]);
    assert_eq!(forest.total_weight(), 3);
    assert!(forest.is_tree());
}

#[test]
fn kruskal_on_triangle_reports_edges_in_weight_order() {
    let forest = triangle()
        .minimum_spanning_tree_kruskal()
        .expect("kruskal must succeed");
    assert_eq!(as_triples(&forest), vec![(1, 2, 1), (2, 3, 2)]);
    assert_eq!(forest.total_weight(), 3);
    assert!(forest.is_tree());
}

#[test]
fn kruskal_canonicalises_edges_with_tail_below_head() {
    let graph = graph(4, &[(4, 1, 3), (3, 2, 1), (2, 4, 2)]);
    let forest = graph
        .minimum_spanning_tree_kruskal()
        .expect("kruskal must succeed");
    assert_eq!(
        forest.edges(),
        &[
            TreeEdge::new(2, 3, 1),
            TreeEdge::new(2, 4, 2),
            TreeEdge::new(1, 4, 3)
        ]
    );
}

#[test]
fn prim_relaxes_against_edge_weight_not_path_weight() {
    // Vertex 2 is re-keyed by its edge from 3, not by its distance from 1.
    let graph = graph(3, &[(1, 2, 10), (2, 3, 1), (1, 3, 5)]);
    let forest = graph.minimum_spanning_tree_prim();
    assert_eq!(as_triples(&forest), vec![(1, 3, 5), (3, 2, 1)]);
    assert_eq!(forest.total_weight(), 6);
}

#[test]
fn single_vertex_graph_is_a_trivial_tree() {
    let graph = graph(1, &[]);
    let prim = graph.minimum_spanning_tree_prim();
    let kruskal = graph
        .minimum_spanning_tree_kruskal()
        .expect("kruskal must succeed");
    for forest in [prim, kruskal] {
        assert!(forest.edges().is_empty());
        assert_eq!(forest.total_weight(), 0);
        assert!(forest.is_tree());
    }
}

#[test]
fn disconnected_graph_yields_explicit_forest() {
    let graph = graph(5, &[(1, 2, 1), (3, 4, 2), (4, 5, 7), (3, 5, 3)]);

    let kruskal = graph
        .minimum_spanning_tree_kruskal()
        .expect("kruskal must terminate on heap exhaustion");
    assert!(kruskal.edges().len() < graph.vertex_count() - 1);
    assert_eq!(kruskal.component_count(), 2);
    assert!(!kruskal.is_tree());
    assert_eq!(kruskal.total_weight(), 6);

    let prim = graph.minimum_spanning_tree_prim();
    assert_eq!(prim.component_count(), 2);
    assert_eq!(prim.total_weight(), 6);
    assert_eq!(as_triples(&prim), vec![(1, 2, 1), (3, 4, 2), (3, 5, 3)]);
}

#[test]
fn edgeless_graph_is_all_singletons() {
    let graph = graph(4, &[]);
    let forest = graph
        .minimum_spanning_tree_kruskal()
        .expect("kruskal must succeed");
    assert_eq!(forest.component_count(), 4);
    assert_eq!(graph.minimum_spanning_tree_prim().component_count(), 4);
}

fn random_edges(rng: &mut SmallRng, vertex_count: usize, connected: bool) -> EdgeList {
    let mut edges = Vec::new();
    if connected {
        for vertex in 2..=vertex_count {
            let parent = rng.gen_range(1..vertex);
            edges.push((parent, vertex, rng.gen_range(0..20)));
        }
    }
    for _ in 0..vertex_count * 2 {
        let first = rng.gen_range(1..=vertex_count);
        let second = rng.gen_range(1..=vertex_count);
        edges.push((first, second, rng.gen_range(0..20)));
    }
    edges
}

#[rstest]
#[case::connected_42(42, true)]
#[case::connected_999(999, true)]
#[case::sparse_42(42, false)]
#[case::sparse_7777(7777, false)]
fn prim_and_kruskal_agree_on_seeded_graphs(#[case] seed: u64, #[case] connected: bool) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let vertex_count = rng.gen_range(8..=40);
    let graph = graph(vertex_count, &random_edges(&mut rng, vertex_count, connected));

    let prim = graph.minimum_spanning_tree_prim();
    let kruskal = graph
        .minimum_spanning_tree_kruskal()
        .expect("kruskal must succeed");

    check_forest(&graph, &prim);
    check_forest(&graph, &kruskal);
    assert_eq!(prim.total_weight(), kruskal.total_weight());
    if connected {
        assert!(prim.is_tree());
        assert!(kruskal.is_tree());
    }
}

fn small_graph() -> impl Strategy<Value = (usize, EdgeList)> {
    (1usize..=6).prop_flat_map(|vertex_count| {
        (
            Just(vertex_count),
            prop::collection::vec((1..=vertex_count, 1..=vertex_count, 0i64..10), 0..10),
        )
    })
}

proptest! {
    #![proptest_config(suite_proptest_config(96))]

    #[test]
    fn both_algorithms_find_minimum_forest_weight((vertex_count, edges) in small_graph()) {
        let graph = graph(vertex_count, &edges);
        let expected = brute_force_forest_weight(vertex_count, &edges);

        let prim = graph.minimum_spanning_tree_prim();
        let kruskal = graph.minimum_spanning_tree_kruskal().expect("kruskal must succeed");

        prop_assert_eq!(prim.total_weight(), expected);
        prop_assert_eq!(kruskal.total_weight(), expected);
        prop_assert_eq!(prim.component_count(), kruskal.component_count());
        prop_assert!(kruskal
            .edges()
            .windows(2)
            .all(|pair| pair[0].weight() <= pair[1].weight()));
    }

    #[test]
    fn insert_then_remove_restores_adjacency((vertex_count, edges) in small_graph(), weight in 0i64..10) {
        let mut graph = graph(vertex_count, &edges);
        let fresh = (1..=vertex_count)
            .flat_map(|first| (first..=vertex_count).map(move |second| (first, second)))
            .find(|&(first, second)| {
                graph.neighbours(first).expect("in range").weight_to(second).is_none()
            });
        let Some((first, second)) = fresh else {
            return Ok(());
        };
        let before = record_sets(&graph);

        graph.insert_edge(first, second, weight).expect("in range");
        graph.remove_edge(first, second).expect("in range");

        prop_assert_eq!(record_sets(&graph), before);
    }
}
