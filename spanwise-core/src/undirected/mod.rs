//! Undirected graphs and minimum spanning trees.
//!
//! Every edge is stored twice, once in each endpoint's [`AdjacencyList`], and
//! both copies always carry the same weight. Prim's algorithm grows trees from
//! the lowest unfinished vertex with an `O(V^2)` selection scan. Kruskal's
//! algorithm drains a [`MinPriorityQueue`] of canonical edges and uses a
//! [`DisjointSetForest`] to reject cycles.
//!
//! Neither algorithm treats a disconnected graph as an error: both return a
//! minimum spanning forest and report how many trees it holds.

use tracing::{debug, instrument, trace};

use crate::{
    adjacency::AdjacencyList,
    disjoint_set::DisjointSetForest,
    error::Result,
    heap::MinPriorityQueue,
    spanning::{SpanningForest, TreeEdge},
    vertex::{VertexId, Weight, nearest_unfinished, slot_index, vertex_slots},
};

/// An undirected graph over the vertices `1..=vertex_count`.
///
/// # Examples
/// ```
/// use spanwise_core::UndirectedGraph;
///
/// let mut graph = UndirectedGraph::new(3)?;
/// graph.insert_edge(1, 2, 1)?;
/// graph.insert_edge(2, 3, 2)?;
/// graph.insert_edge(1, 3, 4)?;
///
/// assert_eq!(graph.minimum_spanning_tree_prim().total_weight(), 3);
/// assert_eq!(graph.minimum_spanning_tree_kruskal()?.total_weight(), 3);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UndirectedGraph {
    lists: Vec<AdjacencyList>,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidSize`] when `vertex_count == 0` and
    /// [`crate::GraphError::TooLarge`] when the adjacency lists cannot be
    /// allocated.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            lists: vertex_slots(vertex_count, AdjacencyList::new())?,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns the number of undirected edges, self-loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.lists
            .iter()
            .enumerate()
            .map(|(index, list)| list.iter().filter(|edge| edge.neighbour() > index).count())
            .sum()
    }

    /// Inserts the edge `{first, second}`, updating its weight when present.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] when either endpoint is
    /// outside `1..=vertex_count`; neither list is touched.
    pub fn insert_edge(&mut self, first: VertexId, second: VertexId, weight: Weight) -> Result<()> {
        let first_index = slot_index(first, self.vertex_count())?;
        let second_index = slot_index(second, self.vertex_count())?;
        self.lists[first_index].insert(second, weight);
        if first != second {
            self.lists[second_index].insert(first, weight);
        }
        Ok(())
    }

    /// Removes the edge `{first, second}` if present.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] when either endpoint is
    /// outside `1..=vertex_count`; neither list is touched.
    pub fn remove_edge(&mut self, first: VertexId, second: VertexId) -> Result<()> {
        let first_index = slot_index(first, self.vertex_count())?;
        let second_index = slot_index(second, self.vertex_count())?;
        self.lists[first_index].remove(second);
        self.lists[second_index].remove(first);
        Ok(())
    }

    /// Returns the edges incident to `vertex`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] for ids outside
    /// `1..=vertex_count`.
    pub fn neighbours(&self, vertex: VertexId) -> Result<&AdjacencyList> {
        let index = slot_index(vertex, self.vertex_count())?;
        Ok(&self.lists[index])
    }

    /// Iterates every edge once as `tail < head`, skipping self-loops.
    pub fn canonical_edges(&self) -> impl Iterator<Item = TreeEdge> + '_ {
        self.lists.iter().zip(1..).flat_map(|(list, tail)| {
            list.iter()
                .filter(move |edge| edge.neighbour() > tail)
                .map(move |edge| TreeEdge::new(tail, edge.neighbour(), edge.weight()))
        })
    }

    /// Computes a minimum spanning forest with Prim's algorithm.
    ///
    /// The first tree grows from vertex `1`. Tentative keys relax against the
    /// connecting edge weight alone. When no unfinished vertex is reachable
    /// the lowest unfinished vertex starts a new tree. Edges are reported as
    /// `(predecessor, vertex, weight)` in the order vertices are finished.
    #[must_use]
    #[instrument(
        name = "undirected.mst_prim",
        level = "debug",
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn minimum_spanning_tree_prim(&self) -> SpanningForest {
        let vertex_count = self.vertex_count();
        let mut keys: Vec<Option<Weight>> = vec![None; vertex_count + 1];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count + 1];
        let mut done = vec![false; vertex_count + 1];
        let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
        let mut components = 0;

        loop {
            let current = match nearest_unfinished(&keys, &done) {
                Some(vertex) => vertex,
                None => {
                    let Some(root) = (1..=vertex_count).find(|&vertex| !done[vertex]) else {
                        break;
                    };
                    keys[root] = Some(0);
                    components += 1;
                    trace!(root, "starting new tree");
                    root
                }
            };
            done[current] = true;

            if let (Some(predecessor), Some(weight)) = (predecessors[current], keys[current]) {
                trace!(tail = predecessor, head = current, weight, "edge accepted");
                edges.push(TreeEdge::new(predecessor, current, weight));
            }

            for edge in &self.lists[current - 1] {
                let next = edge.neighbour();
                if done[next] {
                    continue;
                }
                if keys[next].is_none_or(|known| known > edge.weight()) {
                    keys[next] = Some(edge.weight());
                    predecessors[next] = Some(current);
                }
            }
        }

        let forest = SpanningForest::new(edges, vertex_count, components);
        debug!(
            edges = forest.edges().len(),
            total_weight = forest.total_weight(),
            components = forest.component_count(),
            "prim spanning forest computed"
        );
        forest
    }

    /// Computes a minimum spanning forest with Kruskal's algorithm.
    ///
    /// Each edge enters a fresh heap once in canonical `tail < head` form.
    /// Edges are accepted in non-decreasing weight order while they join two
    /// different trees, until `vertex_count - 1` edges are accepted or the
    /// heap runs dry.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::EmptyQueue`] or
    /// [`crate::GraphError::PreconditionViolation`] if the heap or the
    /// disjoint-set forest breaks its contract. Both indicate a logic error.
    #[instrument(
        name = "undirected.mst_kruskal",
        level = "debug",
        err,
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn minimum_spanning_tree_kruskal(&self) -> Result<SpanningForest> {
        let vertex_count = self.vertex_count();
        let mut queue: MinPriorityQueue<TreeEdge> = self.canonical_edges().collect();
        let mut sets = DisjointSetForest::new(vertex_count)?;
        let wanted = vertex_count - 1;
        let mut edges = Vec::with_capacity(wanted);

        while edges.len() < wanted && !queue.is_empty() {
            let edge = queue.extract_min()?;
            let tail_root = sets.find(edge.tail())?;
            let head_root = sets.find(edge.head())?;
            if tail_root == head_root {
                trace!(tail = edge.tail(), head = edge.head(), "edge closes a cycle");
                continue;
            }
            sets.join(tail_root, head_root)?;
            trace!(
                tail = edge.tail(),
                head = edge.head(),
                weight = edge.weight(),
                "edge accepted"
            );
            edges.push(edge);
        }

        let forest = SpanningForest::new(edges, vertex_count, sets.set_count());
        debug!(
            edges = forest.edges().len(),
            total_weight = forest.total_weight(),
            components = forest.component_count(),
            unused = queue.len(),
            "kruskal spanning forest computed"
        );
        Ok(forest)
    }
}

#[cfg(test)]
mod tests;
