use fleury_core::errors::serde_error;
use fleury_core::FleuryError;

use crate::adjacency::AdjacencyTable;
use crate::multigraph::Multigraph;

/// Serializes an adjacency table to pretty JSON.
pub fn table_to_json(table: &AdjacencyTable) -> Result<String, FleuryError> {
    serde_json::to_string_pretty(table).map_err(|err| serde_error("serialize-json", err))
}

/// Parses an adjacency table from JSON.
pub fn table_from_json(json: &str) -> Result<AdjacencyTable, FleuryError> {
    serde_json::from_str(json).map_err(|err| serde_error("deserialize-json", err))
}

/// Serializes an adjacency table to YAML.
pub fn table_to_yaml(table: &AdjacencyTable) -> Result<String, FleuryError> {
    serde_yaml::to_string(table).map_err(|err| serde_error("serialize-yaml", err))
}

/// Parses an adjacency table from YAML.
pub fn table_from_yaml(yaml: &str) -> Result<AdjacencyTable, FleuryError> {
    serde_yaml::from_str(yaml).map_err(|err| serde_error("deserialize-yaml", err))
}

/// Serializes an adjacency table to a compact binary representation using `bincode`.
pub fn table_to_bytes(table: &AdjacencyTable) -> Result<Vec<u8>, FleuryError> {
    bincode::serialize(table).map_err(|err| serde_error("serialize-bytes", err))
}

/// Restores an adjacency table from its binary representation.
pub fn table_from_bytes(bytes: &[u8]) -> Result<AdjacencyTable, FleuryError> {
    bincode::deserialize(bytes).map_err(|err| serde_error("deserialize-bytes", err))
}

/// Parses and validates a multigraph from JSON.
pub fn graph_from_json(json: &str) -> Result<Multigraph, FleuryError> {
    let table = table_from_json(json)?;
    Multigraph::from_adjacency(&table)
}

/// Serializes the remaining edges of a multigraph to JSON.
pub fn graph_to_json(graph: &Multigraph) -> Result<String, FleuryError> {
    table_to_json(&graph.to_adjacency())
}
