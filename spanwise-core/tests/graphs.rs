//! Tests for the public graph API and its instrumentation.

use rstest::{fixture, rstest};
use spanwise_core::{DirectedGraph, DisjointSetForest, GraphError, Slot, UndirectedGraph};
use tracing_subscriber::layer::SubscriberExt;

use spanwise_test_support::tracing::RecordingLayer;

#[fixture]
fn road_map() -> DirectedGraph {
    let mut graph = DirectedGraph::new(6).expect("non-empty graph");
    for (tail, head, weight) in [
        (1, 2, 7),
        (1, 3, 9),
        (1, 6, 14),
        (2, 3, 10),
        (2, 4, 15),
        (3, 4, 11),
        (3, 6, 2),
        (4, 5, 6),
        (6, 5, 9),
    ] {
        graph.insert_edge(tail, head, weight).expect("in range");
    }
    graph
}

#[fixture]
fn cabling() -> UndirectedGraph {
    let mut graph = UndirectedGraph::new(5).expect("non-empty graph");
    for (first, second, weight) in [
        (1, 2, 3),
        (1, 3, 1),
        (2, 3, 7),
        (2, 4, 5),
        (3, 4, 2),
        (4, 5, 7),
        (3, 5, 8),
    ] {
        graph.insert_edge(first, second, weight).expect("in range");
    }
    graph
}

#[rstest]
fn weighted_run_builds_full_table(mut road_map: DirectedGraph) {
    let tree = road_map
        .positive_weighted_shortest_paths(1)
        .expect("source in range");

    let rows: Vec<_> = tree.rows().collect();
    assert_eq!(
        rows,
        vec![
            (1, Some(0), None),
            (2, Some(7), Some(1)),
            (3, Some(9), Some(1)),
            (4, Some(20), Some(3)),
            (5, Some(20), Some(6)),
            (6, Some(11), Some(3)),
        ]
    );

    let path = road_map.path_to(5).expect("valid").expect("reachable");
    assert_eq!(path.vertices(), &[1, 3, 6, 5]);
    assert_eq!(path.distance(), 20);
}

#[rstest]
fn unweighted_run_counts_hops(mut road_map: DirectedGraph) {
    road_map.unweighted_shortest_paths(1).expect("source in range");
    assert_eq!(road_map.distance(5), Ok(Some(2)));
    assert_eq!(road_map.predecessor(5), Ok(Some(6)));
    assert_eq!(road_map.distance(1), Ok(Some(0)));
}

#[rstest]
fn unreachable_source_row_is_only_itself(mut road_map: DirectedGraph) {
    let tree = road_map
        .unweighted_shortest_paths(5)
        .expect("source in range");
    assert_eq!(tree.reached_count(), 1);
    assert_eq!(road_map.path_to(1), Ok(None));
    let path = road_map.path_to(5).expect("valid").expect("source reaches itself");
    assert_eq!(path.vertices(), &[5]);
    assert_eq!(path.distance(), 0);
}

#[rstest]
fn spanning_algorithms_agree(cabling: UndirectedGraph) {
    let prim = cabling.minimum_spanning_tree_prim();
    let kruskal = cabling
        .minimum_spanning_tree_kruskal()
        .expect("kruskal must succeed");

    assert_eq!(prim.total_weight(), 13);
    assert_eq!(kruskal.total_weight(), 13);
    assert!(prim.is_tree());
    assert!(kruskal.is_tree());
    assert_eq!(prim.edges().len(), 4);
    assert_eq!(kruskal.edges().len(), 4);
}

#[rstest]
fn disjoint_set_exposes_slots_after_joins() {
    let mut forest = DisjointSetForest::new(4).expect("non-empty forest");
    let root = forest.join(1, 2).expect("distinct roots");
    assert_eq!(root, 2);
    let root = forest.join(3, root).expect("distinct roots");
    assert_eq!(root, 2);
    assert_eq!(
        forest.slots(),
        &[
            Slot::Child { parent: 2 },
            Slot::Root { size: 3 },
            Slot::Child { parent: 2 },
            Slot::Root { size: 1 },
        ]
    );
    assert!(matches!(
        forest.join(1, 4),
        Err(GraphError::PreconditionViolation { .. })
    ));
}

#[rstest]
fn shortest_path_runs_emit_spans(mut road_map: DirectedGraph) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || {
        road_map.unweighted_shortest_paths(1).map(|_| ())?;
        road_map.positive_weighted_shortest_paths(2).map(|_| ())
    })
    .expect("runs must succeed");

    let spans = layer.spans();
    let unweighted = spans
        .iter()
        .find(|span| span.name == "directed.unweighted_shortest_paths")
        .expect("unweighted span must exist");
    assert_eq!(unweighted.fields.get("source"), Some(&"1".to_owned()));
    assert_eq!(unweighted.fields.get("vertex_count"), Some(&"6".to_owned()));

    let weighted = spans
        .iter()
        .find(|span| span.name == "directed.positive_weighted_shortest_paths")
        .expect("weighted span must exist");
    assert_eq!(weighted.fields.get("source"), Some(&"2".to_owned()));

    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.fields.get("message") == Some(&"shortest paths computed".to_owned())
            && event.fields.get("reached") == Some(&"5".to_owned())
    }));
}

#[rstest]
fn spanning_runs_emit_spans(cabling: UndirectedGraph) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || {
        let _ = cabling.minimum_spanning_tree_prim();
        cabling.minimum_spanning_tree_kruskal().map(|_| ())
    })
    .expect("kruskal must succeed");

    let names: Vec<_> = layer.spans().into_iter().map(|span| span.name).collect();
    assert!(names.iter().any(|name| name == "undirected.mst_prim"));
    assert!(names.iter().any(|name| name == "undirected.mst_kruskal"));
}
