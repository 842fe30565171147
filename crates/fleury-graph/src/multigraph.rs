use std::collections::BTreeMap;

use fleury_core::errors::{edge_error, input_error, invariant_error};
use fleury_core::{EdgeId, FleuryError, VertexId};

use crate::adjacency::AdjacencyTable;
use crate::ids::{make_edge, make_vertex, pair_key};

#[derive(Debug, Clone)]
pub(crate) struct VertexRecord {
    label: String,
    /// Incident edges in the order the vertex's own adjacency list names them.
    /// A loop appears twice.
    incidence: Vec<EdgeId>,
    degree: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeRecord {
    alive: bool,
    a: VertexId,
    b: VertexId,
}

impl EdgeRecord {
    fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.a == vertex {
            Some(self.b)
        } else if self.b == vertex {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Undirected multigraph backed by an edge arena.
///
/// Every edge instance owns a stable [`EdgeId`] and an alive flag. Removing an
/// edge clears the flag and lowers the degree of its endpoints; the slot stays
/// in the arena so the removal can be undone. A vertex whose degree drops to
/// zero is treated as absent by every query except label lookups.
#[derive(Debug, Clone)]
pub struct Multigraph {
    vertices: Vec<VertexRecord>,
    edges: Vec<EdgeRecord>,
    index: BTreeMap<String, VertexId>,
    alive_edges: usize,
}

impl Multigraph {
    /// Builds a multigraph from caller supplied adjacency data.
    ///
    /// The table must declare at least one vertex, use unique non-empty
    /// labels, only name declared neighbours, and be symmetric: `v` appears in
    /// `u`'s list exactly as often as `u` appears in `v`'s list. Self-loop
    /// occurrences must come in pairs.
    pub fn from_adjacency(table: &AdjacencyTable) -> Result<Self, FleuryError> {
        if table.is_empty() {
            return Err(input_error(
                "empty-graph",
                "adjacency table declares no vertices",
            ));
        }

        check_capacity(table.len(), 0)?;

        let mut index = BTreeMap::new();
        for (position, entry) in table.vertices.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(input_error("empty-label", "vertex labels must be non-empty")
                    .with_context("position", position));
            }
            if index
                .insert(entry.label.clone(), make_vertex(position))
                .is_some()
            {
                return Err(input_error("duplicate-vertex", "vertex declared twice")
                    .with_context("vertex", &entry.label));
            }
        }

        let resolved = resolve_neighbours(table, &index)?;
        check_symmetry(table, &resolved)?;
        check_capacity(table.len(), table.edge_count())?;

        let mut edges: Vec<EdgeRecord> = Vec::new();
        let mut parallel: BTreeMap<(VertexId, VertexId), Vec<EdgeId>> = BTreeMap::new();
        for (position, neighbours) in resolved.iter().enumerate() {
            let u = make_vertex(position);
            let mut loop_pending = false;
            for &v in neighbours {
                let create = if v > u {
                    true
                } else if v == u {
                    loop_pending = !loop_pending;
                    !loop_pending
                } else {
                    false
                };
                if create {
                    let id = make_edge(edges.len());
                    edges.push(EdgeRecord {
                        alive: true,
                        a: u,
                        b: v,
                    });
                    parallel.entry(pair_key(u, v)).or_default().push(id);
                }
            }
        }

        let mut vertices = Vec::with_capacity(table.len());
        for (position, neighbours) in resolved.iter().enumerate() {
            let u = make_vertex(position);
            let mut cursors: BTreeMap<VertexId, usize> = BTreeMap::new();
            let mut incidence = Vec::with_capacity(neighbours.len());
            for &v in neighbours {
                let cursor = cursors.entry(v).or_insert(0);
                let slot = if v == u { *cursor / 2 } else { *cursor };
                *cursor += 1;
                let edge = parallel
                    .get(&pair_key(u, v))
                    .and_then(|ids| ids.get(slot))
                    .copied()
                    .ok_or_else(|| {
                        invariant_error("incidence-mismatch", "no edge instance for occurrence")
                            .with_context("vertex", &table.vertices[position].label)
                            .with_context("slot", slot)
                    })?;
                incidence.push(edge);
            }
            vertices.push(VertexRecord {
                label: table.vertices[position].label.clone(),
                degree: incidence.len(),
                incidence,
            });
        }

        let alive_edges = edges.len();
        log::debug!(
            "built multigraph with {} vertices and {} edges",
            vertices.len(),
            alive_edges
        );
        Ok(Self {
            vertices,
            edges,
            index,
            alive_edges,
        })
    }

    /// Converts the remaining (alive) edges back into an adjacency table.
    ///
    /// Vertices keep their declaration order; vertices without remaining edges
    /// are omitted, unless no edges remain at all.
    pub fn to_adjacency(&self) -> AdjacencyTable {
        let mut table = AdjacencyTable::new();
        for (position, record) in self.vertices.iter().enumerate() {
            if record.degree == 0 && self.alive_edges > 0 {
                continue;
            }
            let u = make_vertex(position);
            let adjacent: Vec<&str> = record
                .incidence
                .iter()
                .filter_map(|edge| {
                    let edge = &self.edges[edge.index()];
                    if !edge.alive {
                        return None;
                    }
                    edge.other(u).map(|v| self.vertices[v.index()].label.as_str())
                })
                .collect();
            table.push(&record.label, &adjacent);
        }
        table
    }

    /// Number of declared vertices, including those without remaining edges.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of remaining (alive) edges.
    pub fn edge_count(&self) -> usize {
        self.alive_edges
    }

    /// Returns whether no edges remain.
    pub fn is_empty(&self) -> bool {
        self.alive_edges == 0
    }

    /// Returns whether the identifier names a declared vertex.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    /// Remaining degree of a vertex; loops count twice. Unknown vertices have
    /// degree zero.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.vertices
            .get(vertex.index())
            .map(|record| record.degree)
            .unwrap_or(0)
    }

    /// Label of a declared vertex.
    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.vertices
            .get(vertex.index())
            .map(|record| record.label.as_str())
    }

    /// Resolves a label to its vertex identifier.
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// All declared vertices in declaration order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(make_vertex)
    }

    /// Vertices that still have at least one incident edge, in declaration order.
    pub fn active_vertices(&self) -> Vec<VertexId> {
        self.vertex_ids()
            .filter(|vertex| self.degree(*vertex) > 0)
            .collect()
    }

    /// Snapshot of the alive edges incident to `vertex`, in incidence order.
    ///
    /// A loop is listed once.
    pub fn incident_edges(&self, vertex: VertexId) -> Vec<EdgeId> {
        let Some(record) = self.vertices.get(vertex.index()) else {
            return Vec::new();
        };
        let mut snapshot: Vec<EdgeId> = Vec::with_capacity(record.degree);
        for edge in &record.incidence {
            if self.edges[edge.index()].alive && !snapshot.contains(edge) {
                snapshot.push(*edge);
            }
        }
        snapshot
    }

    /// Neighbours reachable over alive edges, one entry per incident edge end.
    pub fn neighbours(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get(vertex.index())
            .map(|record| record.incidence.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |edge| {
                let edge = &self.edges[edge.index()];
                if edge.alive {
                    edge.other(vertex)
                } else {
                    None
                }
            })
    }

    /// Endpoints of an edge slot, alive or not.
    pub fn endpoints(&self, edge: EdgeId) -> Result<(VertexId, VertexId), FleuryError> {
        let record = self.record(edge)?;
        Ok((record.a, record.b))
    }

    /// The endpoint of `edge` opposite to `vertex`.
    pub fn other_endpoint(&self, edge: EdgeId, vertex: VertexId) -> Result<VertexId, FleuryError> {
        self.record(edge)?.other(vertex).ok_or_else(|| {
            edge_error("not-incident", "edge is not incident to vertex")
                .with_context("edge", edge.as_raw())
                .with_context("vertex", self.describe(vertex))
        })
    }

    /// Returns whether the edge slot exists and has not been removed.
    pub fn is_alive(&self, edge: EdgeId) -> bool {
        self.edges
            .get(edge.index())
            .map(|record| record.alive)
            .unwrap_or(false)
    }

    /// Removes one instance of the undirected edge `{u, v}`.
    ///
    /// The instance removed is the first alive one in `u`'s incidence order.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<EdgeId, FleuryError> {
        for vertex in [u, v] {
            if !self.contains_vertex(vertex) {
                return Err(edge_error("unknown-vertex", "vertex does not exist")
                    .with_context("vertex", vertex.as_raw()));
            }
        }
        let found = self.vertices[u.index()].incidence.iter().copied().find(|edge| {
            let record = &self.edges[edge.index()];
            record.alive && record.other(u) == Some(v)
        });
        match found {
            Some(edge) => {
                self.detach_edge(edge)?;
                Ok(edge)
            }
            None => Err(edge_error("missing-edge", "no remaining edge between vertices")
                .with_context("from", self.describe(u))
                .with_context("to", self.describe(v))),
        }
    }

    /// Marks an edge slot as consumed.
    pub fn detach_edge(&mut self, edge: EdgeId) -> Result<(), FleuryError> {
        let record = self.record(edge)?;
        if !record.alive {
            return Err(edge_error("edge-consumed", "edge was already removed")
                .with_context("edge", edge.as_raw()));
        }
        let (a, b) = (record.a, record.b);
        self.edges[edge.index()].alive = false;
        self.vertices[a.index()].degree -= 1;
        self.vertices[b.index()].degree -= 1;
        self.alive_edges -= 1;
        Ok(())
    }

    /// Undoes a [`detach_edge`](Self::detach_edge).
    pub fn restore_edge(&mut self, edge: EdgeId) -> Result<(), FleuryError> {
        let record = self.record(edge)?;
        if record.alive {
            return Err(edge_error("edge-alive", "edge is not removed")
                .with_context("edge", edge.as_raw()));
        }
        let (a, b) = (record.a, record.b);
        self.edges[edge.index()].alive = true;
        self.vertices[a.index()].degree += 1;
        self.vertices[b.index()].degree += 1;
        self.alive_edges += 1;
        Ok(())
    }

    /// Maps vertex identifiers to their labels.
    pub fn labels_of(&self, vertices: &[VertexId]) -> Vec<String> {
        vertices
            .iter()
            .map(|vertex| self.describe(*vertex))
            .collect()
    }

    /// Label of the vertex, or its identifier when it is unknown.
    pub fn describe(&self, vertex: VertexId) -> String {
        self.label(vertex)
            .map(str::to_string)
            .unwrap_or_else(|| vertex.to_string())
    }

    fn record(&self, edge: EdgeId) -> Result<&EdgeRecord, FleuryError> {
        self.edges.get(edge.index()).ok_or_else(|| {
            edge_error("unknown-edge", "edge does not exist").with_context("edge", edge.as_raw())
        })
    }
}

fn resolve_neighbours(
    table: &AdjacencyTable,
    index: &BTreeMap<String, VertexId>,
) -> Result<Vec<Vec<VertexId>>, FleuryError> {
    table
        .vertices
        .iter()
        .map(|entry| {
            entry
                .adjacent
                .iter()
                .map(|label| {
                    index.get(label).copied().ok_or_else(|| {
                        input_error("unknown-neighbour", "neighbour is not a declared vertex")
                            .with_context("vertex", &entry.label)
                            .with_context("neighbour", label)
                    })
                })
                .collect()
        })
        .collect()
}

fn check_symmetry(table: &AdjacencyTable, resolved: &[Vec<VertexId>]) -> Result<(), FleuryError> {
    let counts: Vec<BTreeMap<VertexId, usize>> = resolved
        .iter()
        .map(|neighbours| {
            let mut counts = BTreeMap::new();
            for v in neighbours {
                *counts.entry(*v).or_insert(0) += 1;
            }
            counts
        })
        .collect();

    for (position, row) in counts.iter().enumerate() {
        let u = make_vertex(position);
        let label = &table.vertices[position].label;
        for (&v, &count) in row {
            if v == u {
                if count % 2 != 0 {
                    return Err(input_error(
                        "odd-self-loop",
                        "self-loops must be listed twice in the vertex's own list",
                    )
                    .with_context("vertex", label)
                    .with_context("occurrences", count));
                }
                continue;
            }
            let reverse = counts[v.index()].get(&u).copied().unwrap_or(0);
            if reverse != count {
                return Err(input_error(
                    "asymmetric-adjacency",
                    "undirected edge is not listed on both endpoints",
                )
                .with_context("vertex", label)
                .with_context("neighbour", &table.vertices[v.index()].label)
                .with_context("forward", count)
                .with_context("reverse", reverse)
                .with_hint("list each neighbour once per parallel edge on both sides"));
            }
        }
    }
    Ok(())
}

/// Vertex and edge ids are `u32`; larger tables are rejected before any id is
/// assigned.
fn check_capacity(vertices: usize, edges: usize) -> Result<(), FleuryError> {
    for (kind, count) in [("vertices", vertices), ("edges", edges)] {
        if u32::try_from(count).is_err() {
            return Err(
                input_error("graph-too-large", "graph exceeds the 32-bit id space")
                    .with_context(kind, count)
                    .with_context("limit", u32::MAX),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_capacity;

    #[test]
    fn capacity_accepts_the_full_id_space() {
        let limit = u32::MAX as usize;
        assert!(check_capacity(limit, limit).is_ok());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn capacity_rejects_counts_past_u32() {
        let over = u32::MAX as usize + 1;
        for (vertices, edges, kind) in [(over, 0, "vertices"), (3, over, "edges")] {
            let err = check_capacity(vertices, edges).unwrap_err();
            assert_eq!(err.code(), "graph-too-large");
            assert!(err.info().context.contains_key(kind));
        }
    }
}
