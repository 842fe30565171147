#![deny(missing_docs)]

//! Undirected multigraph model for the Fleury Euler-walk engine.
//!
//! Graphs are described by an [`AdjacencyTable`] (one entry per vertex, in
//! declaration order, neighbours repeated once per parallel edge) and turned
//! into a [`Multigraph`]: an arena of edge records with alive flags plus
//! per-vertex incidence lists. Edges are removed by detaching their arena slot,
//! so a trial removal can be undone with [`Multigraph::restore_edge`] without
//! copying the graph.

mod adjacency;
mod generators;
mod hash;
mod ids;
mod multigraph;
mod reach;
mod serialization;

pub use adjacency::{AdjacencyTable, VertexEntry};
pub use generators::{gen_eulerian_circuit, gen_eulerian_trail};
pub use hash::canonical_hash;
pub use multigraph::Multigraph;
pub use reach::{reachable_from, spans_active};
pub use serialization::{
    graph_from_json, graph_to_json, table_from_bytes, table_from_json, table_from_yaml,
    table_to_bytes, table_to_json, table_to_yaml,
};
