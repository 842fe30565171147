use fleury_core::{EdgeId, VertexId};

/// Creates a [`VertexId`] from a position in the vertex array.
///
/// Positions fit in `u32`: `Multigraph::from_adjacency` rejects larger tables
/// with `graph-too-large` before assigning ids.
pub(crate) fn make_vertex(index: usize) -> VertexId {
    VertexId::from_raw(index as u32)
}

/// Creates an [`EdgeId`] from a position in the edge arena. Same bound as
/// [`make_vertex`].
pub(crate) fn make_edge(index: usize) -> EdgeId {
    EdgeId::from_raw(index as u32)
}

/// Orders the endpoints of an undirected edge so parallel edges share a key.
pub(crate) fn pair_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
