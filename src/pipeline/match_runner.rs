//! Batches of headless games between the strategist and a baseline opponent.
//!
//! The opponent plays the human side: each of its moves goes through
//! [`GameController::apply_human_move`], so a match exercises exactly the
//! code path an interactive game does.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    Result,
    adapters::{RandomMover, RecordingRenderer},
    ai::{Difficulty, Strategist},
    app::GameConfig,
    ports::{MoveSelector, Observer},
    tictactoe::{GameController, GameState, Marker},
};

/// Who plays against the strategist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpponentKind {
    Random,
    Strategist(Difficulty),
}

impl OpponentKind {
    /// Build the opponent playing `marker`
    pub fn build(self, marker: Marker, seed: Option<u64>) -> Box<dyn MoveSelector> {
        match self {
            OpponentKind::Random => Box::new(RandomMover::new(marker, seed)),
            OpponentKind::Strategist(difficulty) => {
                Box::new(Strategist::new(marker, difficulty, seed))
            }
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentKind::Random => write!(f, "random"),
            OpponentKind::Strategist(difficulty) => write!(f, "{difficulty}"),
        }
    }
}

impl FromStr for OpponentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Ok(OpponentKind::Random);
        }
        s.parse::<Difficulty>()
            .map(OpponentKind::Strategist)
            .map_err(|_| {
                format!("unknown opponent '{s}'. Supported: random, easy, hard, unbeatable")
            })
    }
}

/// Result of one game from the strategist's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    AiWin,
    OpponentWin,
    Draw,
}

impl MatchOutcome {
    fn from_state(state: GameState, ai: Marker) -> Option<Self> {
        match state {
            GameState::Won(winner) if winner == ai => Some(MatchOutcome::AiWin),
            GameState::Won(_) => Some(MatchOutcome::OpponentWin),
            GameState::Draw => Some(MatchOutcome::Draw),
            GameState::InProgress => None,
        }
    }
}

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game number (0-based)
    pub game_num: usize,
    pub outcome: MatchOutcome,
    /// Cells filled when the game ended
    pub moves: usize,
    /// Whether the strategist made the first move
    pub ai_opened: bool,
    /// Final board, rows separated by `/`
    pub final_board: String,
}

/// Plays many games with one configuration
pub struct MatchRunner {
    config: GameConfig,
    opponent: OpponentKind,
    alternate: bool,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchRunner {
    /// Create a runner; think delays in `config` are ignored
    pub fn new(config: GameConfig, opponent: OpponentKind) -> Self {
        Self {
            config: config.normalized().with_think_delay_ms(0),
            opponent,
            alternate: false,
            observers: Vec::new(),
        }
    }

    /// Let the strategist open every other game
    pub fn alternate_first_move(mut self, alternate: bool) -> Self {
        self.alternate = alternate;
        self
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn opponent(&self) -> OpponentKind {
        self.opponent
    }

    /// Play game number `game_num` to completion.
    ///
    /// Seeds for both sides are derived from the configured seed and the game
    /// number, so a seeded match is reproducible game by game.
    pub fn play_game(&self, game_num: usize) -> GameRecord {
        let mut config = self.config.clone();
        config.seed = self.config.seed.map(|s| s.wrapping_add(game_num as u64));
        if self.alternate {
            config.ai_first = game_num % 2 == 1;
        }
        let opponent_seed = config.seed.map(|s| s.rotate_left(32) ^ 0x5eed);
        let mut opponent = self.opponent.build(config.human_marker, opponent_seed);

        let mut game = GameController::new(&config, RecordingRenderer::new());
        game.start();
        while !game.is_over() {
            let Some(index) = opponent.select_move(game.board()) else {
                break;
            };
            if game.apply_human_move(index).is_none() {
                warn!(index, opponent = opponent.name(), "opponent move rejected");
                break;
            }
        }

        let ai = game.ai_marker();
        let outcome = MatchOutcome::from_state(game.state(), ai).unwrap_or(MatchOutcome::Draw);
        debug!(game_num, ?outcome, "game finished");

        GameRecord {
            game_num,
            outcome,
            moves: game.board().occupied_count(),
            ai_opened: config.ai_first,
            final_board: game.board().to_string().replace('\n', "/"),
        }
    }

    /// Play `games` games, notifying observers along the way.
    pub fn run(&mut self, games: usize) -> Result<Vec<GameRecord>> {
        info!(
            games,
            size = self.config.size,
            difficulty = %self.config.difficulty,
            opponent = %self.opponent,
            "starting match"
        );

        for observer in &mut self.observers {
            observer.on_match_start(games)?;
        }

        let mut records = Vec::with_capacity(games);
        for game_num in 0..games {
            let record = self.play_game(game_num);
            for observer in &mut self.observers {
                observer.on_game_end(&record)?;
            }
            records.push(record);
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }
        Ok(records)
    }
}

/// Aggregate result of a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub size: usize,
    pub difficulty: Difficulty,
    pub opponent: OpponentKind,
    pub games: usize,
    pub ai_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    pub ai_win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    pub avg_game_length: f64,
}

impl MatchSummary {
    pub fn from_records(runner: &MatchRunner, records: &[GameRecord]) -> Self {
        let count = |outcome: MatchOutcome| {
            records.iter().filter(|r| r.outcome == outcome).count()
        };
        let ai_wins = count(MatchOutcome::AiWin);
        let opponent_wins = count(MatchOutcome::OpponentWin);
        let draws = count(MatchOutcome::Draw);
        let games = records.len();
        let rate = |n: usize| {
            if games == 0 {
                0.0
            } else {
                n as f64 / games as f64
            }
        };

        Self {
            size: runner.config.size,
            difficulty: runner.config.difficulty,
            opponent: runner.opponent,
            games,
            ai_wins,
            opponent_wins,
            draws,
            ai_win_rate: rate(ai_wins),
            draw_rate: rate(draws),
            loss_rate: rate(opponent_wins),
            avg_game_length: if games == 0 {
                0.0
            } else {
                records.iter().map(|r| r.moves).sum::<usize>() as f64 / games as f64
            },
        }
    }
}
