//! Spanwise core library.
//!
//! Weighted graphs over 1-based vertex ids with the classic algorithms run on
//! them: breadth-first and positive-weight shortest paths on directed graphs,
//! and Prim's and Kruskal's minimum spanning trees on undirected graphs. The
//! binary min-heap and disjoint-set forest that back Kruskal's algorithm are
//! exported as standalone structures.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod directed;
mod disjoint_set;
mod error;
mod heap;
mod paths;
mod spanning;
mod undirected;
mod vertex;

#[cfg(test)]
mod test_utils;

pub use crate::{
    adjacency::{Adjacency, AdjacencyList},
    directed::DirectedGraph,
    disjoint_set::{DisjointSetForest, Slot},
    error::{GraphError, GraphErrorCode, Result},
    heap::MinPriorityQueue,
    paths::{ShortestPath, ShortestPathTree},
    spanning::{SpanningForest, TreeEdge},
    undirected::UndirectedGraph,
    vertex::{VertexId, Weight},
};
