//! Minimax search with alpha-beta pruning.
//!
//! The engine searches from the AI's point of view: the AI maximises, its
//! opponent minimises. Terminal positions score [`WIN_SCORE`] for an AI win,
//! [`LOSS_SCORE`] for an opponent win and [`DRAW_SCORE`] otherwise. Scores are
//! not discounted by depth, so a win five plies away is worth the same as a
//! win on the next move.
//!
//! Hypothetical positions are explored on a single working copy of the board
//! with mark/clear undo instead of cloning a board per node.

use tracing::debug;

use crate::tictactoe::{BoardState, Marker};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Move chosen at the root; `None` when the AI is not the side to move or
    /// the position is already terminal
    pub best_move: Option<usize>,
    /// Value of the root position for the AI
    pub score: i32,
    /// Positions visited
    pub nodes: u64,
}

/// Alpha-beta search engine for one AI marker.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    ai: Marker,
    nodes: u64,
    best_move: Option<usize>,
}

impl SearchEngine {
    pub fn new(ai: Marker) -> Self {
        Self {
            ai,
            nodes: 0,
            best_move: None,
        }
    }

    /// Search `board` with `to_move` on turn, using full `(-∞, +∞)` bounds.
    ///
    /// Among equally scored root moves the lowest cell index wins.
    pub fn search(&mut self, board: &BoardState, to_move: Marker) -> SearchResult {
        self.nodes = 0;
        self.best_move = None;

        let mut work = board.clone();
        let score = self.alpha_beta(&mut work, to_move, i32::MIN, i32::MAX, 0);
        debug_assert_eq!(&work, board, "search must leave the board unchanged");

        debug!(
            ai = %self.ai,
            score,
            nodes = self.nodes,
            best_move = ?self.best_move,
            "alpha-beta search finished"
        );

        SearchResult {
            best_move: self.best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Optimal move for the AI on `board`, assuming the AI is to move
    pub fn best_move(&mut self, board: &BoardState) -> Option<usize> {
        self.search(board, self.ai).best_move
    }

    fn terminal_score(&self, board: &BoardState) -> Option<i32> {
        if board.has_won(self.ai) {
            Some(WIN_SCORE)
        } else if board.has_won(self.ai.opponent()) {
            Some(LOSS_SCORE)
        } else if board.is_full() {
            Some(DRAW_SCORE)
        } else {
            None
        }
    }

    fn alpha_beta(
        &mut self,
        board: &mut BoardState,
        to_move: Marker,
        mut alpha: i32,
        mut beta: i32,
        ply: usize,
    ) -> i32 {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(board) {
            return score;
        }

        let maximizing = to_move == self.ai;
        for index in board.empty_cells() {
            board.mark_cell(index, to_move);
            let score = self.alpha_beta(board, to_move.opponent(), alpha, beta, ply + 1);
            board.clear_cell(index);

            if maximizing {
                if score > alpha {
                    alpha = score;
                    if ply == 0 {
                        self.best_move = Some(index);
                    }
                }
                if alpha >= beta {
                    return alpha;
                }
            } else {
                beta = beta.min(score);
                if beta <= alpha {
                    return beta;
                }
            }
        }

        if maximizing { alpha } else { beta }
    }
}
