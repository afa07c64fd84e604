//! Vertex and weight primitives shared by the graph types.

use crate::error::{GraphError, Result};

/// Dense vertex identifier in `1..=vertex_count`.
pub type VertexId = usize;

/// Integer edge weight.
///
/// The algorithms assume non-negative weights but do not validate them.
pub type Weight = i64;

/// Rejects empty vertex sets.
pub(crate) const fn check_size(vertex_count: usize) -> Result<usize> {
    if vertex_count == 0 {
        return Err(GraphError::InvalidSize { got: vertex_count });
    }
    Ok(vertex_count)
}

/// Allocates one `fill` per vertex.
///
/// Counts the allocator cannot satisfy surface as [`GraphError::TooLarge`]
/// instead of aborting.
pub(crate) fn vertex_slots<T: Clone>(vertex_count: usize, fill: T) -> Result<Vec<T>> {
    check_size(vertex_count)?;
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(vertex_count)
        .map_err(|_| GraphError::TooLarge { got: vertex_count })?;
    slots.resize(vertex_count, fill);
    Ok(slots)
}

/// Validates `vertex` against `1..=vertex_count` and returns its zero-based
/// storage index.
pub(crate) const fn slot_index(vertex: VertexId, vertex_count: usize) -> Result<usize> {
    if vertex == 0 || vertex > vertex_count {
        return Err(GraphError::InvalidVertex {
            vertex,
            vertex_count,
        });
    }
    Ok(vertex - 1)
}

/// Returns the unfinished vertex with the smallest known key.
///
/// `keys` and `done` are indexed by vertex id (slot 0 unused). Ties resolve to
/// the lowest vertex id. Vertices without a key are never selected, so `None`
/// means every remaining vertex is unreachable from the finished set.
pub(crate) fn nearest_unfinished(keys: &[Option<Weight>], done: &[bool]) -> Option<VertexId> {
    keys.iter()
        .zip(done)
        .enumerate()
        .skip(1)
        .filter(|(_, (_, finished))| !**finished)
        .filter_map(|(vertex, (key, _))| key.map(|known| (known, vertex)))
        .min()
        .map(|(_, vertex)| vertex)
}
