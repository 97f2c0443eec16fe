//! Tiered computer opponent.
//!
//! Every tier first completes its own line when one cell away from a win.
//! Past that:
//!
//! | Tier       | Opponent about to win        | Otherwise          |
//! |------------|------------------------------|--------------------|
//! | Easy       | block half of the time       | random empty cell  |
//! | Hard       | always block                 | random empty cell  |
//! | Unbeatable | full alpha-beta search       | full search        |
//!
//! On boards larger than 3×3 an exhaustive search from a nearly empty board is
//! far too slow, so the unbeatable tier plays like the hard tier for an
//! opening window of its own moves first: 4 moves on 4×4, 8 on 5×5, and four
//! more per extra side beyond that.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{random::RandomIndex, search::SearchEngine};
use crate::{
    ports::{Marked, MoveSelector},
    tictactoe::{BoardState, Marker},
};

/// Empty cells at or below which the unbeatable tier searches on boards of
/// side six and up.
pub const SEARCH_EMPTY_LIMIT: usize = 10;

/// AI difficulty tier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "u8")]
pub enum Difficulty {
    Easy = 1,
    Hard = 2,
    #[default]
    Unbeatable = 3,
}

impl Difficulty {
    /// Tier for a numeric level, clamped into `1..=3`
    pub fn from_level(level: i64) -> Self {
        match level {
            ..=1 => Difficulty::Easy,
            2 => Difficulty::Hard,
            3.. => Difficulty::Unbeatable,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }
}

impl From<i64> for Difficulty {
    fn from(level: i64) -> Self {
        Difficulty::from_level(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.level()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::Unbeatable => "unbeatable",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Accepts a tier name or a numeric level; numbers are clamped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            "unbeatable" => Ok(Difficulty::Unbeatable),
            other => other.parse::<i64>().map(Difficulty::from_level).map_err(|_| {
                format!("unknown difficulty '{other}' (expected easy, hard, unbeatable or 1-3)")
            }),
        }
    }
}

/// Computer player combining quick line checks with alpha-beta search.
#[derive(Debug, Clone)]
pub struct Strategist {
    marker: Marker,
    difficulty: Difficulty,
    moves_made: usize,
    engine: SearchEngine,
    rng: RandomIndex,
}

impl Strategist {
    /// Create a strategist; `seed` fixes its random choices
    pub fn new(marker: Marker, difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self {
            marker,
            difficulty,
            moves_made: 0,
            engine: SearchEngine::new(marker),
            rng: RandomIndex::new(seed),
        }
    }

    pub fn opponent(&self) -> Marker {
        self.marker.opponent()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of moves chosen so far
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Own moves the unbeatable tier plays without searching on a board of `size`
    pub fn opening_window(size: usize) -> usize {
        size.saturating_sub(3) * 4
    }

    /// First move of a game the computer opens: a uniformly random cell.
    pub fn opening_move(&mut self, board: &BoardState) -> Option<usize> {
        self.moves_made += 1;
        let choice = self.rng.choose(&board.empty_cells());
        debug!(marker = %self.marker, choice = ?choice, "opening move");
        choice
    }

    /// Empty cell completing a line for `marker`, from the first such line.
    fn completing_move(board: &BoardState, marker: Marker) -> Option<usize> {
        board
            .almost_winning_lines(marker)
            .into_iter()
            .find_map(|line| board.empty_cell_in(line))
    }

    fn random_move(&mut self, board: &BoardState) -> Option<usize> {
        self.rng.choose(&board.empty_cells())
    }

    fn block_or_random(&mut self, board: &BoardState) -> Option<usize> {
        if let Some(block) = Self::completing_move(board, self.opponent()) {
            debug!(marker = %self.marker, block, "blocking opponent");
            return Some(block);
        }
        self.random_move(board)
    }

    /// Whether the unbeatable tier searches this turn.
    ///
    /// Past the opening window, boards of side six and up are still only
    /// searched once at most [`SEARCH_EMPTY_LIMIT`] cells remain empty; until
    /// then the tier keeps blocking or playing at random.
    fn search_is_affordable(&self, board: &BoardState) -> bool {
        if self.moves_made <= Self::opening_window(board.size()) {
            return false;
        }
        board.size() <= 5 || board.empty_cells().len() <= SEARCH_EMPTY_LIMIT
    }
}

impl Marked for Strategist {
    fn marker(&self) -> Marker {
        self.marker
    }
}

impl MoveSelector for Strategist {
    fn select_move(&mut self, board: &BoardState) -> Option<usize> {
        self.moves_made += 1;

        if let Some(win) = Self::completing_move(board, self.marker) {
            debug!(marker = %self.marker, win, "completing own line");
            return Some(win);
        }

        match self.difficulty {
            Difficulty::Easy => {
                if let Some(block) = Self::completing_move(board, self.opponent())
                    && self.rng.flip()
                {
                    debug!(marker = %self.marker, block, "blocking opponent");
                    return Some(block);
                }
                self.random_move(board)
            }
            Difficulty::Hard => self.block_or_random(board),
            Difficulty::Unbeatable => {
                if !self.search_is_affordable(board) {
                    debug!(
                        marker = %self.marker,
                        moves_made = self.moves_made,
                        "opening window, skipping search"
                    );
                    return self.block_or_random(board);
                }
                self.engine
                    .best_move(board)
                    .or_else(|| self.random_move(board))
            }
        }
    }

    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::Unbeatable => "unbeatable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_clamping() {
        assert_eq!(Difficulty::from_level(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(2), Difficulty::Hard);
        assert_eq!(Difficulty::from_level(5), Difficulty::Unbeatable);
        assert_eq!(Difficulty::from_level(-1), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(300), Difficulty::Unbeatable);
        assert_eq!(u8::from(Difficulty::Hard), 2);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("9".parse::<Difficulty>().unwrap(), Difficulty::Unbeatable);
        assert_eq!("300".parse::<Difficulty>().unwrap(), Difficulty::Unbeatable);
        assert_eq!("-1".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_serializes_as_level() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "2");
        let parsed: Difficulty = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, Difficulty::Unbeatable);
        let parsed: Difficulty = serde_json::from_str("300").unwrap();
        assert_eq!(parsed, Difficulty::Unbeatable);
        let parsed: Difficulty = serde_json::from_str("-1").unwrap();
        assert_eq!(parsed, Difficulty::Easy);
    }

    #[test]
    fn test_opening_window() {
        assert_eq!(Strategist::opening_window(2), 0);
        assert_eq!(Strategist::opening_window(3), 0);
        assert_eq!(Strategist::opening_window(4), 4);
        assert_eq!(Strategist::opening_window(5), 8);
        assert_eq!(Strategist::opening_window(8), 20);
    }

    #[test]
    fn test_every_tier_takes_own_win() {
        // OO.
        // XX.
        // X..
        let board = BoardState::from_string("OO./XX./X..").unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Hard, Difficulty::Unbeatable] {
            for seed in 0..10 {
                let mut ai = Strategist::new(Marker::O, difficulty, Some(seed));
                assert_eq!(ai.select_move(&board), Some(2), "{difficulty}");
            }
        }
    }

    #[test]
    fn test_hard_always_blocks() {
        let board = BoardState::from_string("XX./.O./...").unwrap();
        for seed in 0..20 {
            let mut ai = Strategist::new(Marker::O, Difficulty::Hard, Some(seed));
            assert_eq!(ai.select_move(&board), Some(2));
        }
    }

    #[test]
    fn test_easy_blocks_only_sometimes() {
        let board = BoardState::from_string("XX./.O./...").unwrap();
        let mut ai = Strategist::new(Marker::O, Difficulty::Easy, Some(3));
        let blocks = (0..200)
            .filter(|_| ai.select_move(&board) == Some(2))
            .count();
        assert!(blocks > 50 && blocks < 200, "blocked {blocks} of 200");
    }

    #[test]
    fn test_moves_are_counted_per_call() {
        let board = BoardState::new(4);
        let mut ai = Strategist::new(Marker::O, Difficulty::Unbeatable, Some(1));
        ai.opening_move(&board);
        ai.select_move(&board);
        assert_eq!(ai.moves_made(), 2);
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let board = BoardState::from_string("XOX/XOO/OXX").unwrap();
        let mut ai = Strategist::new(Marker::O, Difficulty::Hard, Some(1));
        assert_eq!(ai.select_move(&board), None);
    }
}
