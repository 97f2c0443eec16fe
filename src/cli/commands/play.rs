//! Play command - Human vs computer in the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::instrument;

use crate::{
    adapters::TerminalRenderer,
    cli::{
        config::SessionArgs,
        output::{print_kv, print_section},
    },
    tictactoe::{GameController, GameState},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Let the computer make the first move
    #[arg(long)]
    pub ai_first: bool,

    /// Pause before each computer move, in milliseconds
    #[arg(long, default_value_t = 250)]
    pub delay_ms: u64,
}

/// Parse a 1-based cell number typed by the player into a board index.
pub fn parse_cell(input: &str, cell_count: usize) -> crate::Result<usize> {
    let invalid = || crate::Error::InvalidCellInput {
        input: input.to_string(),
        max: cell_count,
    };
    let number: usize = input.trim().parse().map_err(|_| invalid())?;
    if (1..=cell_count).contains(&number) {
        Ok(number - 1)
    } else {
        Err(invalid())
    }
}

#[instrument]
pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = args.session.resolve()?.with_think_delay_ms(args.delay_ms);
    if args.ai_first {
        config = config.with_ai_first(true);
    }

    print_section("Tic-tac-toe");
    print_kv("Board", &format!("{0}x{0}", config.size));
    print_kv("You play", &config.human_marker.to_string());
    print_kv("Difficulty", &config.difficulty.to_string());

    let cell_count = config.size * config.size;
    let mut game = GameController::new(&config, TerminalRenderer::stdout());
    game.start();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !game.is_over() {
        print!(
            "\nYour move ({}) [1-{cell_count}, q to quit]: ",
            game.human_marker()
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            println!("Bye.");
            return Ok(());
        }

        match parse_cell(input, cell_count) {
            Ok(index) => {
                if game.apply_human_move(index).is_none() {
                    println!("Cell {} is already taken.", index + 1);
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    match game.state() {
        GameState::Won(winner) if winner == game.human_marker() => println!("You win!"),
        GameState::Won(_) => println!("The computer wins."),
        GameState::Draw | GameState::InProgress => {}
    }
    Ok(())
}
