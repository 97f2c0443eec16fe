//! Turn-by-turn game management between a human and the computer

use std::{thread, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::{
    board::{BoardState, Cell, Marker},
    lines::LineId,
};
use crate::{
    ai::{Difficulty, Strategist},
    app::GameConfig,
    ports::{Human, Marked, MoveSelector, Renderer},
};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won(Marker),
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

/// What one accepted human move led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub human_move: usize,
    /// The computer's reply, absent when the human move ended the game
    pub ai_move: Option<usize>,
    pub state: GameState,
}

/// Drives a single game session: one board, one human, one computer.
///
/// A session only moves forward. Once the game is won or drawn every further
/// move is ignored; a new game needs a new controller.
pub struct GameController<R: Renderer> {
    board: BoardState,
    human: Human,
    ai: Strategist,
    state: GameState,
    renderer: R,
    ai_first: bool,
    think_delay: Duration,
    started: bool,
}

impl<R: Renderer> GameController<R> {
    /// Create a session from `config`, clamping out-of-range values.
    pub fn new(config: &GameConfig, renderer: R) -> Self {
        let config = config.clone().normalized();
        Self {
            board: BoardState::new(config.size),
            human: Human::new(config.human_marker),
            ai: Strategist::new(config.ai_marker(), config.difficulty, config.seed),
            state: GameState::InProgress,
            renderer,
            ai_first: config.ai_first,
            think_delay: config.think_delay(),
            started: false,
        }
    }

    /// Render the empty board and, when the computer opens, play its first move.
    ///
    /// Returns the computer's opening move. Only the first call has any effect.
    pub fn start(&mut self) -> Option<usize> {
        if self.started {
            return None;
        }
        self.started = true;
        self.renderer.render_board(&self.board);

        if !self.ai_first || self.state.is_terminal() {
            return None;
        }
        self.pause();
        let index = self.ai.opening_move(&self.board)?;
        self.place(index, self.ai.marker());
        Some(index)
    }

    /// Play the human's move at `index`, then the computer's reply.
    ///
    /// Returns `None` without touching anything when the game is over, the
    /// index is off the board, or the cell is taken.
    pub fn apply_human_move(&mut self, index: usize) -> Option<Turn> {
        if self.state.is_terminal() || !self.board.is_cell_empty(index) {
            trace!(index, state = ?self.state, "ignoring human move");
            return None;
        }

        self.place(index, self.human.marker());
        let ai_move = if self.state.is_terminal() {
            None
        } else {
            self.ai_turn()
        };

        Some(Turn {
            human_move: index,
            ai_move,
            state: self.state,
        })
    }

    fn ai_turn(&mut self) -> Option<usize> {
        self.pause();
        let index = self.ai.select_move(&self.board)?;
        debug_assert!(self.board.is_cell_empty(index), "AI chose occupied cell {index}");
        self.place(index, self.ai.marker());
        Some(index)
    }

    fn pause(&self) {
        if !self.think_delay.is_zero() {
            thread::sleep(self.think_delay);
        }
    }

    fn place(&mut self, index: usize, marker: Marker) {
        self.board.mark_cell(index, marker);
        debug!(index, %marker, "move placed");
        self.renderer.render_board(&self.board);
        self.evaluate(marker);
    }

    fn evaluate(&mut self, marker: Marker) {
        let lines = self.board.winning_lines(marker);
        if !lines.is_empty() {
            self.state = GameState::Won(marker);
            info!(
                winner = %marker,
                lines = ?lines.iter().map(ToString::to_string).collect::<Vec<_>>(),
                "game won"
            );
            self.renderer.render_win(marker, &lines);
        } else if self.board.is_full() {
            self.state = GameState::Draw;
            info!("game drawn");
            self.renderer.render_draw();
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Full cell contents in row-major order
    pub fn cells(&self) -> &[Cell] {
        self.board.cells()
    }

    /// Lines held by the winner, empty unless the game is won
    pub fn winning_lines(&self) -> Vec<LineId> {
        match self.state {
            GameState::Won(winner) => self.board.winning_lines(winner),
            _ => Vec::new(),
        }
    }

    pub fn human_marker(&self) -> Marker {
        self.human.marker()
    }

    pub fn ai_marker(&self) -> Marker {
        self.ai.marker()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.ai.difficulty()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
