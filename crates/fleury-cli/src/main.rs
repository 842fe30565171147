use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    check::{self, CheckArgs},
    generate::{self, GenerateArgs},
    version::{self, VersionArgs},
    walk::{self, WalkArgs},
};

mod commands;
mod input;

#[derive(Parser, Debug)]
#[command(name = "fleury", about = "Euler walks over undirected multigraphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find an Euler walk through every edge of a graph file.
    Walk(WalkArgs),
    /// Report whether a graph admits an Euler walk without building it.
    Check(CheckArgs),
    /// Write a random multigraph that admits an Euler walk.
    Generate(GenerateArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Walk(args) => walk::run(&args),
        Command::Check(args) => check::run(&args),
        Command::Generate(args) => generate::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
