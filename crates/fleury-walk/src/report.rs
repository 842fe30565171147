use fleury_core::errors::serde_error;
use fleury_core::{FleuryError, SchemaVersion, VertexId, WalkKind, WalkProvenance};
use fleury_graph::Multigraph;
use serde::{Deserialize, Serialize};

use crate::fleury::EulerWalk;

/// Schema version of serialized [`WalkReport`]s.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializable summary of a walk, with labels instead of vertex ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkReport {
    /// Schema version of this payload.
    pub schema_version: SchemaVersion,
    /// Input graph hash, seed and tool version.
    pub provenance: WalkProvenance,
    /// Closed circuit or open walk.
    pub kind: WalkKind,
    /// Label of the first vertex.
    pub start: String,
    /// Label of the last vertex.
    pub end: String,
    /// Number of edges traversed.
    pub edge_count: usize,
    /// Visited vertex labels in order.
    pub vertices: Vec<String>,
}

impl WalkReport {
    /// Builds a report; `graph` only supplies labels, so a consumed graph works.
    pub fn new(graph: &Multigraph, walk: &EulerWalk, provenance: WalkProvenance) -> Self {
        Self {
            schema_version: REPORT_SCHEMA,
            provenance,
            kind: walk.kind,
            start: graph.describe(walk.start),
            end: graph.describe(walk.end),
            edge_count: walk.edge_count(),
            vertices: graph.labels_of(&walk.vertices),
        }
    }

    /// Labels joined with arrows.
    pub fn rendered(&self) -> String {
        self.vertices.join(" -> ")
    }

    /// Serializes the report to pretty JSON.
    pub fn to_json(&self) -> Result<String, FleuryError> {
        serde_json::to_string_pretty(self).map_err(|err| serde_error("serialize-json", err))
    }

    /// Parses a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, FleuryError> {
        serde_json::from_str(json).map_err(|err| serde_error("deserialize-json", err))
    }
}

/// Renders a walk as `A -> B -> C`.
pub fn render_walk(graph: &Multigraph, walk: &[VertexId]) -> String {
    graph.labels_of(walk).join(" -> ")
}
