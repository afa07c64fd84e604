//! Minimum spanning tree and forest results.

use std::cmp::Ordering;

use crate::vertex::{VertexId, Weight};

/// An undirected edge selected for, or considered by, a spanning tree.
///
/// Edges order by weight first, then by `(tail, head)`, giving Kruskal's heap
/// a deterministic total order on weight ties.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeEdge {
    tail: VertexId,
    head: VertexId,
    weight: Weight,
}

impl TreeEdge {
    /// Creates an edge from `tail` to `head`.
    #[must_use]
    pub const fn new(tail: VertexId, head: VertexId, weight: Weight) -> Self {
        Self { tail, head, weight }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tail(&self) -> VertexId { self.tail }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn head(&self) -> VertexId { self.head }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

impl Ord for TreeEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.tail.cmp(&other.tail))
            .then_with(|| self.head.cmp(&other.head))
    }
}

impl PartialOrd for TreeEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The output of a minimum spanning tree computation.
///
/// When the graph is disconnected the result is a minimum spanning forest
/// with one tree per connected component; [`Self::is_tree`] tells the two
/// apart.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<TreeEdge>,
    total_weight: Weight,
    vertex_count: usize,
    component_count: usize,
}

impl SpanningForest {
    pub(crate) fn new(edges: Vec<TreeEdge>, vertex_count: usize, component_count: usize) -> Self {
        let total_weight = edges
            .iter()
            .fold(0, |total: Weight, edge| total.saturating_add(edge.weight));
        Self {
            edges,
            total_weight,
            vertex_count,
            component_count,
        }
    }

    /// Returns the accepted edges in the order the algorithm selected them.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &[TreeEdge] { self.edges.as_slice() }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of vertices of the source graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of trees in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest is a single spanning tree.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}
