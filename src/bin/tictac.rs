//! tictac CLI - N×N tic-tac-toe against a tiered computer opponent
//!
//! - `play`: a human-vs-computer game in the terminal
//! - `bench`: many headless games of the computer against a baseline

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictac")]
#[command(version, about = "Tic-tac-toe on N×N boards against a tiered AI", long_about = None)]
struct Cli {
    /// Log search and move decisions to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(tictac::cli::commands::play::PlayArgs),

    /// Play the computer against a baseline opponent
    Bench(tictac::cli::commands::bench::BenchArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "tictac=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => tictac::cli::commands::play::execute(args),
        Commands::Bench(args) => tictac::cli::commands::bench::execute(args),
    }
}
