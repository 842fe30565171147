use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fleury_core::rng::SUBSTREAM_GENERATOR;
use fleury_core::RngHandle;
use fleury_graph::{gen_eulerian_circuit, gen_eulerian_trail, table_to_json};

use crate::input::write_table;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of vertices.
    #[arg(long)]
    pub vertices: usize,
    /// Number of edges.
    #[arg(long)]
    pub edges: usize,
    /// Generate a graph with exactly two odd-degree vertices.
    #[arg(long)]
    pub open: bool,
    /// Master seed for the generator.
    #[arg(long, default_value_t = 2024)]
    pub seed: u64,
    /// Output file; the format follows the extension. Prints JSON when absent.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let mut rng = RngHandle::substream(args.seed, SUBSTREAM_GENERATOR);
    let graph = if args.open {
        gen_eulerian_trail(args.vertices, args.edges, &mut rng)?
    } else {
        gen_eulerian_circuit(args.vertices, args.edges, &mut rng)?
    };
    let table = graph.to_adjacency();
    match &args.out {
        Some(path) => {
            write_table(path, &table)?;
            log::info!(
                "wrote {} vertices and {} edges to {}",
                table.len(),
                table.edge_count(),
                path.display()
            );
        }
        None => println!("{}", table_to_json(&table)?),
    }
    Ok(())
}
