use fleury_core::errors::invariant_error;
use fleury_core::{EdgeId, FleuryError, VertexId, WalkKind};
use fleury_graph::{spans_active, Multigraph};
use rand::seq::SliceRandom;

use crate::config::WalkConfig;
use crate::validate::{check_connected, validate, Endpoints};
use crate::verify::verify_walk;

/// A finished Euler walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerWalk {
    /// Closed circuit or open walk.
    pub kind: WalkKind,
    /// First vertex.
    pub start: VertexId,
    /// Last vertex.
    pub end: VertexId,
    /// Visited vertices; consecutive pairs are the traversed edges.
    pub vertices: Vec<VertexId>,
}

impl EulerWalk {
    /// Number of edges traversed.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns whether the walk ends where it started.
    pub fn is_closed(&self) -> bool {
        self.start == self.end
    }
}

/// Validates `graph` and builds an Euler walk through all of its edges.
///
/// The graph is consumed: on success every edge has been detached and only
/// the labels remain useful. When `config.verify` is set, a copy taken
/// beforehand is used to re-check the result.
pub fn find_euler_walk(
    graph: &mut Multigraph,
    config: &WalkConfig,
) -> Result<EulerWalk, FleuryError> {
    let endpoints = validate(graph)?;
    if config.connectivity_precheck {
        check_connected(graph, &endpoints)?;
    }
    let original = config.verify.then(|| graph.clone());

    let vertices = build_walk(graph, &endpoints, config)?;
    if let Some(original) = &original {
        verify_walk(original, &vertices)?;
    }
    log::info!(
        "found {} walk of {} edges from {} to {}",
        endpoints.kind,
        vertices.len() - 1,
        graph.describe(endpoints.start),
        graph.describe(endpoints.end)
    );
    Ok(EulerWalk {
        kind: endpoints.kind,
        start: endpoints.start,
        end: endpoints.end,
        vertices,
    })
}

/// Runs Fleury's algorithm from `endpoints.start` until no edges remain.
///
/// At each step the alive edges at the current vertex are tried in the
/// configured order. A candidate is detached and kept if it was the last edge,
/// or if every vertex that still has edges stays reachable from its far end;
/// otherwise it is a bridge, so it is restored and the next candidate is tried.
pub fn build_walk(
    graph: &mut Multigraph,
    endpoints: &Endpoints,
    config: &WalkConfig,
) -> Result<Vec<VertexId>, FleuryError> {
    let original_edges = graph.edge_count();
    let mut rng = config.candidate_order.rng();
    let mut position = endpoints.start;
    let mut walk = Vec::with_capacity(original_edges + 1);
    walk.push(position);

    while !graph.is_empty() {
        let mut candidates = graph.incident_edges(position);
        if candidates.is_empty() {
            return Err(invariant_error(
                "stranded-edges",
                "current vertex has no edges but edges remain elsewhere",
            )
            .with_context("vertex", graph.describe(position))
            .with_context("remaining", graph.edge_count())
            .with_hint("the edge-bearing vertices are not connected"));
        }
        if let Some(rng) = rng.as_mut() {
            candidates.shuffle(rng);
        }
        let next = commit_next_edge(graph, position, &candidates)?;
        log::debug!(
            "step {}: {} -> {}",
            walk.len(),
            graph.describe(position),
            graph.describe(next)
        );
        walk.push(next);
        position = next;
    }

    check_postconditions(graph, endpoints, &walk, original_edges)?;
    Ok(walk)
}

fn commit_next_edge(
    graph: &mut Multigraph,
    position: VertexId,
    candidates: &[EdgeId],
) -> Result<VertexId, FleuryError> {
    for &edge in candidates {
        let next = graph.other_endpoint(edge, position)?;
        graph.detach_edge(edge)?;
        if graph.is_empty() || spans_active(graph, next) {
            return Ok(next);
        }
        log::trace!(
            "deferring bridge {} -> {}",
            graph.describe(position),
            graph.describe(next)
        );
        graph.restore_edge(edge)?;
    }
    Err(invariant_error(
        "no-committable-edge",
        "every candidate edge would strand the remaining edges",
    )
    .with_context("vertex", graph.describe(position))
    .with_context("candidates", candidates.len())
    .with_context("remaining", graph.edge_count())
    .with_hint("the edge-bearing vertices are not connected"))
}

fn check_postconditions(
    graph: &Multigraph,
    endpoints: &Endpoints,
    walk: &[VertexId],
    original_edges: usize,
) -> Result<(), FleuryError> {
    let first = walk.first().copied();
    let last = walk.last().copied();
    if first != Some(endpoints.start)
        || last != Some(endpoints.end)
        || walk.len() != original_edges + 1
    {
        let describe = |vertex: Option<VertexId>| {
            vertex
                .map(|vertex| graph.describe(vertex))
                .unwrap_or_else(|| "-".into())
        };
        return Err(invariant_error("postcondition", "walk does not match its endpoints")
            .with_context("expected_start", graph.describe(endpoints.start))
            .with_context("expected_end", graph.describe(endpoints.end))
            .with_context("first", describe(first))
            .with_context("last", describe(last))
            .with_context("length", walk.len())
            .with_context("edges", original_edges));
    }
    Ok(())
}
