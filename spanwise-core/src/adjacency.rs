//! Per-vertex edge storage.
//!
//! An [`AdjacencyList`] keeps at most one record per neighbour in insertion
//! order, which makes traversal order, and therefore algorithm output,
//! reproducible. Traversal hands out an independent iterator per call, so
//! nested scans over the same list never interfere with each other.

use std::{iter::Copied, slice};

use crate::vertex::{VertexId, Weight};

/// A single outgoing edge record: the neighbour reached and the edge weight.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Adjacency {
    neighbour: VertexId,
    weight: Weight,
}

impl Adjacency {
    /// Creates a record pointing at `neighbour` with the given `weight`.
    #[must_use]
    pub const fn new(neighbour: VertexId, weight: Weight) -> Self {
        Self { neighbour, weight }
    }

    /// Returns the vertex at the far end of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn neighbour(&self) -> VertexId { self.neighbour }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// Ordered collection of [`Adjacency`] records with unique neighbours.
///
/// # Examples
/// ```
/// use spanwise_core::AdjacencyList;
///
/// let mut list = AdjacencyList::new();
/// list.insert(3, 7);
/// list.insert(2, 1);
/// list.insert(3, 4);
///
/// let records: Vec<_> = list.iter().map(|edge| (edge.neighbour(), edge.weight())).collect();
/// assert_eq!(records, vec![(3, 4), (2, 1)]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdjacencyList {
    records: Vec<Adjacency>,
}

impl AdjacencyList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Inserts an edge to `neighbour`, replacing the weight in place when the
    /// neighbour is already present.
    ///
    /// Returns the previous weight if one was replaced.
    pub fn insert(&mut self, neighbour: VertexId, weight: Weight) -> Option<Weight> {
        if let Some(record) = self
            .records
            .iter_mut()
            .find(|record| record.neighbour == neighbour)
        {
            return Some(std::mem::replace(&mut record.weight, weight));
        }
        self.records.push(Adjacency::new(neighbour, weight));
        None
    }

    /// Removes the edge to `neighbour`, preserving the order of the remaining
    /// records. Missing neighbours are ignored.
    ///
    /// Returns the weight of the removed edge.
    pub fn remove(&mut self, neighbour: VertexId) -> Option<Weight> {
        let position = self
            .records
            .iter()
            .position(|record| record.neighbour == neighbour)?;
        Some(self.records.remove(position).weight)
    }

    /// Returns the weight of the edge to `neighbour`, if present.
    #[must_use]
    pub fn weight_to(&self, neighbour: VertexId) -> Option<Weight> {
        self.records
            .iter()
            .find(|record| record.neighbour == neighbour)
            .map(Adjacency::weight)
    }

    /// Returns a fresh iterator over the records in storage order.
    pub fn iter(&self) -> Copied<slice::Iter<'_, Adjacency>> {
        self.records.iter().copied()
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the list holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = Adjacency;
    type IntoIter = Copied<slice::Iter<'a, Adjacency>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
