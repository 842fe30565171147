use serde::{Deserialize, Serialize};

/// Caller supplied description of an undirected multigraph.
///
/// Entries keep their declaration order, which fixes the dense vertex ids and
/// the order in which the walk builder tries candidate edges. A neighbour
/// listed `k` times is joined by `k` parallel edges; a self-loop is written as
/// two occurrences of the vertex in its own list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AdjacencyTable {
    /// Vertex entries in declaration order.
    pub vertices: Vec<VertexEntry>,
}

/// A single vertex and the labels of its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexEntry {
    /// Display label of the vertex.
    pub label: String,
    /// Neighbour labels, one occurrence per incident edge end.
    #[serde(default)]
    pub adjacent: Vec<String>,
}

impl AdjacencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex entry, builder style.
    pub fn with_vertex<S: AsRef<str>>(mut self, label: &str, adjacent: &[S]) -> Self {
        self.push(label, adjacent);
        self
    }

    /// Appends a vertex entry.
    pub fn push<S: AsRef<str>>(&mut self, label: &str, adjacent: &[S]) {
        self.vertices.push(VertexEntry {
            label: label.to_string(),
            adjacent: adjacent.iter().map(|s| s.as_ref().to_string()).collect(),
        });
    }

    /// Number of declared vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether no vertices are declared.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges implied by the table (half the adjacency entries).
    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .map(|entry| entry.adjacent.len())
            .sum::<usize>()
            / 2
    }
}
