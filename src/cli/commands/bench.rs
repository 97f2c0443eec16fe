//! Bench command - Play the computer against a baseline many times

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::to_writer_pretty;
use tracing::instrument;

use crate::{
    cli::{
        config::SessionArgs,
        output::{format_percent, print_section, print_stats_table},
    },
    pipeline::{JsonlObserver, MatchRunner, MatchSummary, OpponentKind, ProgressObserver},
};

#[derive(Parser, Debug)]
#[command(about = "Play the computer against a baseline opponent")]
pub struct BenchArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Opponent playing the human side: random, easy, hard, unbeatable
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: OpponentKind,

    /// Let the computer open every other game
    #[arg(long)]
    pub alternate: bool,

    /// Write one JSON line per game to this file
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Export the summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

#[instrument]
pub fn execute(args: BenchArgs) -> Result<()> {
    let config = args.session.resolve()?;

    let mut runner =
        MatchRunner::new(config, args.opponent).alternate_first_move(args.alternate);
    if !args.quiet {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.record {
        let observer = JsonlObserver::create(path)
            .with_context(|| format!("creating game record {}", path.display()))?;
        runner = runner.with_observer(Box::new(observer));
    }

    let records = runner.run(args.games)?;
    let summary = MatchSummary::from_records(&runner, &records);

    print_section(&format!(
        "{} ({}x{}) vs {}",
        summary.difficulty, summary.size, summary.size, summary.opponent
    ));
    print_stats_table(&[
        ("Games", summary.games.to_string()),
        ("Computer wins", format_percent(summary.ai_win_rate)),
        ("Draws", format_percent(summary.draw_rate)),
        ("Computer losses", format_percent(summary.loss_rate)),
        ("Avg. game length", format!("{:.2}", summary.avg_game_length)),
    ]);

    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("creating summary file {}", path.display()))?;
        to_writer_pretty(file, &summary)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}
