use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fleury_core::WalkKind;
use fleury_graph::Multigraph;
use fleury_walk::{check_connected, validate};
use serde::Serialize;

use crate::input::load_table;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Graph file (`.json`, `.yaml`/`.yml` or `.bin`).
    #[arg(long)]
    pub graph: PathBuf,
    /// Print the verdict as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Verdict {
    kind: WalkKind,
    start: String,
    end: String,
    odd_vertices: Vec<String>,
    edges: usize,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let table = load_table(&args.graph)?;
    let graph = Multigraph::from_adjacency(&table)?;
    let endpoints = validate(&graph)?;
    check_connected(&graph, &endpoints)?;

    let verdict = Verdict {
        kind: endpoints.kind,
        start: graph.describe(endpoints.start),
        end: graph.describe(endpoints.end),
        odd_vertices: graph.labels_of(&endpoints.odd_vertices),
        edges: graph.edge_count(),
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        println!("Euler {} exists", verdict.kind);
        println!("start: {}", verdict.start);
        println!("end: {}", verdict.end);
        println!("edges: {}", verdict.edges);
        if !verdict.odd_vertices.is_empty() {
            println!("odd vertices: {}", verdict.odd_vertices.join(", "));
        }
    }
    Ok(())
}
