//! Directed graphs and single-source shortest paths.
//!
//! A [`DirectedGraph`] owns one [`AdjacencyList`] per vertex and keeps the
//! result of its most recent shortest-path run. Both algorithms overwrite that
//! result wholesale; the `&mut self` receivers rule out overlapping runs.

use std::collections::VecDeque;

use tracing::{debug, instrument, trace};

use crate::{
    adjacency::AdjacencyList,
    error::{GraphError, Result},
    paths::{ShortestPath, ShortestPathTree},
    vertex::{VertexId, Weight, nearest_unfinished, slot_index, vertex_slots},
};

/// A directed graph over the vertices `1..=vertex_count`.
///
/// # Examples
/// ```
/// use spanwise_core::DirectedGraph;
///
/// let mut graph = DirectedGraph::new(3)?;
/// graph.insert_edge(1, 2, 5)?;
/// graph.insert_edge(2, 3, 1)?;
/// graph.insert_edge(1, 3, 2)?;
///
/// graph.positive_weighted_shortest_paths(1)?;
/// assert_eq!(graph.distance(3)?, Some(2));
/// assert_eq!(graph.predecessor(3)?, Some(1));
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DirectedGraph {
    lists: Vec<AdjacencyList>,
    shortest_paths: Option<ShortestPathTree>,
}

impl DirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSize`] when `vertex_count == 0` and
    /// [`GraphError::TooLarge`] when the adjacency lists cannot be allocated.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            lists: vertex_slots(vertex_count, AdjacencyList::new())?,
            shortest_paths: None,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns the number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(AdjacencyList::len).sum()
    }

    /// Inserts the edge `tail -> head`, updating its weight when present.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when either endpoint is outside
    /// `1..=vertex_count`; the graph is left unchanged.
    pub fn insert_edge(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> Result<()> {
        let index = slot_index(tail, self.vertex_count())?;
        slot_index(head, self.vertex_count())?;
        self.lists[index].insert(head, weight);
        Ok(())
    }

    /// Removes the edge `tail -> head` if present.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when either endpoint is outside
    /// `1..=vertex_count`.
    pub fn remove_edge(&mut self, tail: VertexId, head: VertexId) -> Result<()> {
        let index = slot_index(tail, self.vertex_count())?;
        slot_index(head, self.vertex_count())?;
        self.lists[index].remove(head);
        Ok(())
    }

    /// Returns the outgoing edges of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] for ids outside
    /// `1..=vertex_count`.
    pub fn neighbours(&self, vertex: VertexId) -> Result<&AdjacencyList> {
        let index = slot_index(vertex, self.vertex_count())?;
        Ok(&self.lists[index])
    }

    /// Computes hop counts from `source` by breadth-first search.
    ///
    /// Each vertex is enqueued at most once, the first time it is discovered,
    /// and receives the hop count of its discoverer plus one.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] for a source outside
    /// `1..=vertex_count`; the previous result is kept.
    #[instrument(
        name = "directed.unweighted_shortest_paths",
        level = "debug",
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn unweighted_shortest_paths(&mut self, source: VertexId) -> Result<&ShortestPathTree> {
        let vertex_count = self.vertex_count();
        slot_index(source, vertex_count)?;

        let mut distances: Vec<Option<Weight>> = vec![None; vertex_count + 1];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count + 1];
        let mut queue = VecDeque::with_capacity(vertex_count);
        distances[source] = Some(0);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            let hops = distances[current].unwrap_or_default().saturating_add(1);
            for edge in &self.lists[current - 1] {
                let next = edge.neighbour();
                if distances[next].is_none() {
                    distances[next] = Some(hops);
                    predecessors[next] = Some(current);
                    queue.push_back(next);
                    trace!(vertex = next, hops, via = current, "vertex discovered");
                }
            }
        }

        Ok(self.store(ShortestPathTree::new(source, distances, predecessors)))
    }

    /// Computes weighted distances from `source` with Dijkstra's algorithm.
    ///
    /// The next vertex to finish is found by a linear scan over all vertices,
    /// giving `O(V^2)` overall. Weights must be non-negative; negative weights
    /// are not detected and yield unspecified distances. The run ends once no
    /// unfinished vertex has a finite tentative distance.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] for a source outside
    /// `1..=vertex_count`; the previous result is kept.
    #[instrument(
        name = "directed.positive_weighted_shortest_paths",
        level = "debug",
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn positive_weighted_shortest_paths(
        &mut self,
        source: VertexId,
    ) -> Result<&ShortestPathTree> {
        let vertex_count = self.vertex_count();
        slot_index(source, vertex_count)?;

        let mut distances: Vec<Option<Weight>> = vec![None; vertex_count + 1];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count + 1];
        let mut done = vec![false; vertex_count + 1];
        distances[source] = Some(0);

        while let Some(current) = nearest_unfinished(&distances, &done) {
            done[current] = true;
            let base = distances[current].unwrap_or_default();
            trace!(vertex = current, distance = base, "vertex finished");

            for edge in &self.lists[current - 1] {
                let next = edge.neighbour();
                if done[next] {
                    continue;
                }
                let candidate = base.saturating_add(edge.weight());
                if distances[next].is_none_or(|known| known > candidate) {
                    distances[next] = Some(candidate);
                    predecessors[next] = Some(current);
                }
            }
        }

        Ok(self.store(ShortestPathTree::new(source, distances, predecessors)))
    }

    /// Returns the result of the most recent shortest-path run.
    #[must_use]
    pub const fn shortest_paths(&self) -> Option<&ShortestPathTree> {
        self.shortest_paths.as_ref()
    }

    /// Returns the distance to `vertex` from the most recent run's source.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] for ids outside
    /// `1..=vertex_count` and [`GraphError::NoShortestPaths`] before any run.
    pub fn distance(&self, vertex: VertexId) -> Result<Option<Weight>> {
        slot_index(vertex, self.vertex_count())?;
        self.last_run()?.distance(vertex)
    }

    /// Returns the predecessor of `vertex` from the most recent run.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] for ids outside
    /// `1..=vertex_count` and [`GraphError::NoShortestPaths`] before any run.
    pub fn predecessor(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        slot_index(vertex, self.vertex_count())?;
        self.last_run()?.predecessor(vertex)
    }

    /// Reconstructs the path to `target` from the most recent run's source.
    ///
    /// Returns `None` when `target` was not reached.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] for ids outside
    /// `1..=vertex_count` and [`GraphError::NoShortestPaths`] before any run.
    pub fn path_to(&self, target: VertexId) -> Result<Option<ShortestPath>> {
        slot_index(target, self.vertex_count())?;
        self.last_run()?.path_to(target)
    }

    fn last_run(&self) -> Result<&ShortestPathTree> {
        self.shortest_paths.as_ref().ok_or(GraphError::NoShortestPaths)
    }

    fn store(&mut self, tree: ShortestPathTree) -> &ShortestPathTree {
        debug!(
            source = tree.source(),
            reached = tree.reached_count(),
            "shortest paths computed"
        );
        self.shortest_paths.insert(tree)
    }
}
