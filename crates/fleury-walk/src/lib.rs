#![deny(missing_docs)]

//! Euler walks over undirected multigraphs.
//!
//! [`validate`] checks the degree condition and picks the endpoints,
//! [`build_walk`] runs Fleury's algorithm (prefer a non-bridge edge, defer
//! bridges, force the last edge) and [`find_euler_walk`] ties both together.
//! [`verify_walk`] independently checks a finished walk against the original
//! graph.

mod config;
mod fleury;
mod report;
mod validate;
mod verify;

pub use config::{CandidateOrder, WalkConfig};
pub use fleury::{build_walk, find_euler_walk, EulerWalk};
pub use report::{render_walk, WalkReport, REPORT_SCHEMA};
pub use validate::{check_connected, odd_vertices, validate, Endpoints};
pub use verify::verify_walk;
