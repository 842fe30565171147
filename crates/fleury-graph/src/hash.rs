use sha2::{Digest, Sha256};

use crate::ids::pair_key;
use crate::multigraph::Multigraph;

/// Computes the canonical structural hash of the remaining graph.
///
/// Covers the declared labels in order and the multiset of alive edges, so two
/// tables listing the same edges in a different neighbour order hash equal.
pub fn canonical_hash(graph: &Multigraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update((graph.vertex_count() as u64).to_le_bytes());
    for vertex in graph.vertex_ids() {
        let label = graph.label(vertex).unwrap_or_default();
        hasher.update((label.len() as u64).to_le_bytes());
        hasher.update(label.as_bytes());
    }

    let mut pairs: Vec<(u32, u32)> = Vec::with_capacity(graph.edge_count());
    for vertex in graph.vertex_ids() {
        for edge in graph.incident_edges(vertex) {
            if let Ok((a, b)) = graph.endpoints(edge) {
                // Record each edge from its lower endpoint only.
                if a.min(b) == vertex {
                    let (lo, hi) = pair_key(a, b);
                    pairs.push((lo.as_raw(), hi.as_raw()));
                }
            }
        }
    }
    pairs.sort_unstable();
    hasher.update((pairs.len() as u64).to_le_bytes());
    for (lo, hi) in pairs {
        hasher.update(lo.to_le_bytes());
        hasher.update(hi.to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}
