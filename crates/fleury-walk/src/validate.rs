use fleury_core::errors::{input_error, no_walk_error};
use fleury_core::{FleuryError, VertexId, WalkKind};
use fleury_graph::{spans_active, Multigraph};

/// Where a walk must start and end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// First vertex of the walk.
    pub start: VertexId,
    /// Last vertex of the walk.
    pub end: VertexId,
    /// Closed circuit or open walk.
    pub kind: WalkKind,
    /// Odd-degree vertices in declaration order (empty or two entries).
    pub odd_vertices: Vec<VertexId>,
}

/// Vertices with odd remaining degree, in declaration order.
pub fn odd_vertices(graph: &Multigraph) -> Vec<VertexId> {
    graph
        .vertex_ids()
        .filter(|vertex| graph.degree(*vertex) % 2 == 1)
        .collect()
}

/// Checks the degree condition for an Euler walk and picks its endpoints.
///
/// With no odd vertices the walk is a circuit starting at the first
/// edge-bearing vertex in declaration order (the first declared vertex when
/// there are no edges at all). With two odd vertices the walk runs from the
/// first declared one to the other. Any other count fails with `NoEulerWalk`.
pub fn validate(graph: &Multigraph) -> Result<Endpoints, FleuryError> {
    let odd = odd_vertices(graph);
    match odd.len() {
        0 => {
            let start = graph
                .active_vertices()
                .first()
                .copied()
                .or_else(|| graph.vertex_ids().next())
                .ok_or_else(|| input_error("empty-graph", "graph declares no vertices"))?;
            Ok(Endpoints {
                start,
                end: start,
                kind: WalkKind::Circuit,
                odd_vertices: odd,
            })
        }
        2 => Ok(Endpoints {
            start: odd[0],
            end: odd[1],
            kind: WalkKind::Open,
            odd_vertices: odd,
        }),
        count => Err(no_walk_error(
            "odd-degree",
            "graph has no Euler walk: more than two vertices of odd degree",
        )
        .with_context("odd_vertices", count)
        .with_hint(format!(
            "odd-degree vertices: {}",
            graph.labels_of(&odd).join(", ")
        ))),
    }
}

/// Fails with `NoEulerWalk` when some edge cannot be reached from the start.
pub fn check_connected(graph: &Multigraph, endpoints: &Endpoints) -> Result<(), FleuryError> {
    if graph.is_empty() || spans_active(graph, endpoints.start) {
        return Ok(());
    }
    Err(no_walk_error(
        "disconnected",
        "graph has no Euler walk: edges are split across components",
    )
    .with_context("start", graph.describe(endpoints.start))
    .with_context("active_vertices", graph.active_vertices().len()))
}
