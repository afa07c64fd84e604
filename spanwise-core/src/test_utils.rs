//! Shared test utilities for `spanwise-core`.

use std::collections::HashMap;

use proptest::test_runner::Config as ProptestConfig;
use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::vertex::{VertexId, Weight};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SPANWISE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Collapses repeated directed edges so the last weight wins, mirroring
/// in-place weight updates on insert.
fn final_weights(edges: &[(VertexId, VertexId, Weight)]) -> HashMap<(VertexId, VertexId), Weight> {
    edges
        .iter()
        .map(|&(tail, head, weight)| ((tail, head), weight))
        .collect()
}

/// Hop counts from `source` by repeated unit-weight relaxation over every
/// edge. Indexed by vertex id; slot `0` is unused.
pub(crate) fn brute_force_hops(
    vertex_count: usize,
    edges: &[(VertexId, VertexId, Weight)],
    source: VertexId,
) -> Vec<Option<Weight>> {
    let edges = final_weights(edges);
    let mut hops = vec![None; vertex_count + 1];
    hops[source] = Some(0);
    for _ in 0..vertex_count {
        for &(tail, head) in edges.keys() {
            if let Some(base) = hops[tail] {
                let candidate = base + 1;
                if hops[head].is_none_or(|known| known > candidate) {
                    hops[head] = Some(candidate);
                }
            }
        }
    }
    hops
}

/// Shortest weighted distances from `source` by enumerating every simple
/// path. Only suitable for a handful of vertices.
pub(crate) fn brute_force_distances(
    vertex_count: usize,
    edges: &[(VertexId, VertexId, Weight)],
    source: VertexId,
) -> Vec<Option<Weight>> {
    fn walk(
        vertex: VertexId,
        total: Weight,
        edges: &HashMap<(VertexId, VertexId), Weight>,
        on_path: &mut [bool],
        best: &mut [Option<Weight>],
    ) {
        if best[vertex].is_none_or(|known| known > total) {
            best[vertex] = Some(total);
        }
        on_path[vertex] = true;
        for (&(tail, head), &weight) in edges {
            if tail == vertex && !on_path[head] {
                walk(head, total + weight, edges, on_path, best);
            }
        }
        on_path[vertex] = false;
    }

    let edges = final_weights(edges);
    let mut best = vec![None; vertex_count + 1];
    let mut on_path = vec![false; vertex_count + 1];
    walk(source, 0, &edges, &mut on_path, &mut best);
    best
}

/// Weight of a minimum spanning forest found by trying every subset of the
/// canonical undirected edges. Only suitable for a handful of edges.
pub(crate) fn brute_force_forest_weight(
    vertex_count: usize,
    edges: &[(VertexId, VertexId, Weight)],
) -> Weight {
    let canonical: Vec<(VertexId, VertexId, Weight)> = edges
        .iter()
        .filter(|(tail, head, _)| tail != head)
        .map(|&(tail, head, weight)| ((tail.min(head), tail.max(head)), weight))
        .collect::<HashMap<_, _>>()
        .into_iter()
        .map(|((tail, head), weight)| (tail, head, weight))
        .collect();

    let target_edges = vertex_count - component_count(vertex_count, &canonical);
    let mut best: Option<Weight> = None;
    for mask in 0u32..(1 << canonical.len()) {
        let chosen: Vec<_> = canonical
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if chosen.len() != target_edges
            || component_count(vertex_count, &chosen) != vertex_count - target_edges
        {
            continue;
        }
        let weight: Weight = chosen.iter().map(|(_, _, weight)| weight).sum();
        if best.is_none_or(|known| known > weight) {
            best = Some(weight);
        }
    }
    best.unwrap_or_default()
}

/// Number of connected components induced by `edges` over `1..=vertex_count`.
pub(crate) fn component_count(
    vertex_count: usize,
    edges: &[(VertexId, VertexId, Weight)],
) -> usize {
    fn root(parent: &mut [usize], mut node: usize) -> usize {
        while parent[node] != node {
            parent[node] = parent[parent[node]];
            node = parent[node];
        }
        node
    }

    let mut parent: Vec<usize> = (0..=vertex_count).collect();
    let mut components = vertex_count;
    for &(tail, head, _) in edges {
        let tail_root = root(&mut parent, tail);
        let head_root = root(&mut parent, head);
        if tail_root != head_root {
            parent[head_root] = tail_root;
            components -= 1;
        }
    }
    components
}
