use fleury_core::errors::invariant_error;
use fleury_core::{FleuryError, VertexId};
use fleury_graph::Multigraph;

/// Checks that `walk` traverses every edge of `original` exactly once.
///
/// Each consecutive pair must consume a distinct remaining instance of an
/// original edge, and no edge may be left over.
pub fn verify_walk(original: &Multigraph, walk: &[VertexId]) -> Result<(), FleuryError> {
    if walk.is_empty() {
        return Err(invariant_error("walk-mismatch", "walk has no vertices"));
    }
    let mut scratch = original.clone();
    for (step, pair) in walk.windows(2).enumerate() {
        scratch.remove_edge(pair[0], pair[1]).map_err(|_| {
            invariant_error(
                "walk-mismatch",
                "walk uses an edge that is missing or already used",
            )
            .with_context("step", step + 1)
            .with_context("from", original.describe(pair[0]))
            .with_context("to", original.describe(pair[1]))
        })?;
    }
    if !scratch.is_empty() {
        return Err(invariant_error("walk-mismatch", "walk leaves edges unused")
            .with_context("unused", scratch.edge_count()));
    }
    Ok(())
}
