//! Seeded synthetic graphs.
//!
//! Every graph is a random spanning tree rooted at vertex `1`, with tree
//! edges pointing away from the root, plus extra random edges. Directed
//! builds are therefore fully reachable from `1` and undirected builds are
//! connected.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwise_core::{DirectedGraph, GraphError, UndirectedGraph, VertexId, Weight};

use crate::error::BenchSetupError;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Random edges added on top of the spanning tree. Self-loops drawn
    /// here are discarded.
    pub extra_edges: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// Seed for the generator.
    pub seed: u64,
}

/// A generated edge list.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<(VertexId, VertexId, Weight)>,
}

impl SyntheticGraph {
    /// Generates a graph from `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when the vertex count or the
    /// maximum weight is not positive.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, BenchSetupError> {
        if config.vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        if config.max_weight < 1 {
            return Err(BenchSetupError::ZeroValue {
                context: "max_weight",
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut edges = Vec::with_capacity(config.vertex_count + config.extra_edges);
        for vertex in 2..=config.vertex_count {
            let parent = rng.gen_range(1..vertex);
            edges.push((parent, vertex, rng.gen_range(1..=config.max_weight)));
        }
        for _ in 0..config.extra_edges {
            let tail = rng.gen_range(1..=config.vertex_count);
            let head = rng.gen_range(1..=config.vertex_count);
            if tail != head {
                edges.push((tail, head, rng.gen_range(1..=config.max_weight)));
            }
        }

        Ok(Self {
            vertex_count: config.vertex_count,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the generated edges in generation order.
    #[must_use]
    pub const fn edges(&self) -> &[(VertexId, VertexId, Weight)] {
        self.edges.as_slice()
    }

    /// Builds a directed graph with every edge pointing from tail to head.
    ///
    /// # Errors
    /// Propagates [`GraphError`] from graph construction.
    pub fn directed(&self) -> Result<DirectedGraph, GraphError> {
        let mut graph = DirectedGraph::new(self.vertex_count)?;
        for &(tail, head, weight) in &self.edges {
            graph.insert_edge(tail, head, weight)?;
        }
        Ok(graph)
    }

    /// Builds an undirected graph over the same edges.
    ///
    /// # Errors
    /// Propagates [`GraphError`] from graph construction.
    pub fn undirected(&self) -> Result<UndirectedGraph, GraphError> {
        let mut graph = UndirectedGraph::new(self.vertex_count)?;
        for &(first, second, weight) in &self.edges {
            graph.insert_edge(first, second, weight)?;
        }
        Ok(graph)
    }
}
