//! Shortest-path results.
//!
//! A [`ShortestPathTree`] is produced by every single-source run on a
//! [`crate::DirectedGraph`] and replaced wholesale by the next one. Unreached
//! vertices carry `None` for both distance and predecessor.

use crate::{
    error::Result,
    vertex::{VertexId, Weight, slot_index},
};

/// Distances and predecessors from one source vertex.
///
/// # Examples
/// ```
/// use spanwise_core::DirectedGraph;
///
/// let mut graph = DirectedGraph::new(3)?;
/// graph.insert_edge(1, 2, 4)?;
/// let tree = graph.positive_weighted_shortest_paths(1)?;
/// assert_eq!(tree.distance(2)?, Some(4));
/// assert_eq!(tree.predecessor(2)?, Some(1));
/// assert_eq!(tree.distance(3)?, None);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    /// Builds a tree from arrays indexed by vertex id; slot `0` is unused.
    pub(crate) fn new(
        source: VertexId,
        distances: Vec<Option<Weight>>,
        predecessors: Vec<Option<VertexId>>,
    ) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        Self {
            source,
            distances,
            predecessors,
        }
    }

    /// Returns the source vertex of the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the number of vertices covered by the tree.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.distances.len().saturating_sub(1)
    }

    /// Returns the number of vertices reached from the source, the source
    /// included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.distances.iter().flatten().count()
    }

    /// Returns the shortest known distance to `vertex`, or `None` when it was
    /// not reached.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] for ids outside
    /// `1..=vertex_count`.
    pub fn distance(&self, vertex: VertexId) -> Result<Option<Weight>> {
        slot_index(vertex, self.vertex_count())?;
        Ok(self.distances[vertex])
    }

    /// Returns the vertex preceding `vertex` on its shortest path, or `None`
    /// for the source and for unreached vertices.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] for ids outside
    /// `1..=vertex_count`.
    pub fn predecessor(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        slot_index(vertex, self.vertex_count())?;
        Ok(self.predecessors[vertex])
    }

    /// Iterates `(vertex, distance, predecessor)` rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = (VertexId, Option<Weight>, Option<VertexId>)> + '_ {
        self.distances
            .iter()
            .zip(&self.predecessors)
            .enumerate()
            .skip(1)
            .map(|(vertex, (distance, predecessor))| (vertex, *distance, *predecessor))
    }

    /// Reconstructs the path from the source to `target` by walking
    /// predecessors backwards. Returns `None` when `target` was not reached.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] for ids outside
    /// `1..=vertex_count`.
    pub fn path_to(&self, target: VertexId) -> Result<Option<ShortestPath>> {
        let Some(distance) = self.distance(target)? else {
            return Ok(None);
        };
        let mut vertices: Vec<VertexId> =
            std::iter::successors(Some(target), |&vertex| self.predecessors[vertex])
                .take(self.vertex_count())
                .collect();
        vertices.reverse();
        Ok(Some(ShortestPath { vertices, distance }))
    }
}

/// One reconstructed source-to-target path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPath {
    vertices: Vec<VertexId>,
    distance: Weight,
}

impl ShortestPath {
    /// Returns the vertices from source to target, both inclusive.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[VertexId] { &self.vertices }

    /// Returns the total distance of the path.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> Weight { self.distance }
}
