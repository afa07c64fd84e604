//! Benchmark support crate for spanwise.
//!
//! Provides seeded synthetic graphs and parameter labels for the Criterion
//! benchmarks comparing Prim with Kruskal and breadth-first search with
//! Dijkstra.

pub mod error;
pub mod params;
pub mod source;
