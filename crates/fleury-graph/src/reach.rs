use std::collections::BTreeSet;

use fleury_core::VertexId;

use crate::multigraph::Multigraph;

/// Vertices reachable from `start` over the remaining edges, `start` included.
///
/// Iterative depth-first traversal. A vertex is expanded once, so parallel
/// edges and loops back into visited vertices are never followed again. An
/// unknown `start` yields an empty set.
pub fn reachable_from(graph: &Multigraph, start: VertexId) -> BTreeSet<VertexId> {
    let mut visited = BTreeSet::new();
    if !graph.contains_vertex(start) {
        return visited;
    }
    let mut stack = vec![start];
    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex) {
            continue;
        }
        for neighbour in graph.neighbours(vertex) {
            if !visited.contains(&neighbour) {
                stack.push(neighbour);
            }
        }
    }
    visited
}

/// Returns whether every vertex that still has edges is reachable from `from`.
pub fn spans_active(graph: &Multigraph, from: VertexId) -> bool {
    let reached = reachable_from(graph, from);
    let active = graph.active_vertices();
    let covered = active
        .iter()
        .filter(|vertex| reached.contains(vertex))
        .count();
    covered == active.len()
}
