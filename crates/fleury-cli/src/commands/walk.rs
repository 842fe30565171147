use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fleury_core::WalkProvenance;
use fleury_graph::{canonical_hash, Multigraph};
use fleury_walk::{find_euler_walk, CandidateOrder, WalkConfig, WalkReport};

use crate::input::{load_config, load_table};

#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Graph file (`.json`, `.yaml`/`.yml` or `.bin`).
    #[arg(long)]
    pub graph: PathBuf,
    /// YAML walk configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Shuffle candidate edges with this seed instead of using input order.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Reject disconnected graphs before walking.
    #[arg(long)]
    pub precheck: bool,
    /// Re-check the finished walk against the input graph.
    #[arg(long)]
    pub verify: bool,
    /// Print a JSON report instead of the arrow-joined walk.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &WalkArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    let table = load_table(&args.graph)?;
    let mut graph = Multigraph::from_adjacency(&table)?;
    let graph_hash = canonical_hash(&graph);

    let walk = find_euler_walk(&mut graph, &config)?;
    let report = WalkReport::new(
        &graph,
        &walk,
        WalkProvenance {
            graph_hash,
            seed: config.seed(),
            tool_version: env!("CARGO_PKG_VERSION").into(),
        },
    );

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("One possible Euler-Walk:");
        println!("{}", report.rendered());
    }
    Ok(())
}

fn resolve_config(args: &WalkArgs) -> Result<WalkConfig, Box<dyn Error>> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.candidate_order = CandidateOrder::Seeded { seed };
    }
    config.connectivity_precheck |= args.precheck;
    config.verify |= args.verify;
    Ok(config)
}
