//! Uniform-random baseline player.

use crate::{
    ai::RandomIndex,
    ports::{Marked, MoveSelector},
    tictactoe::{BoardState, Marker},
};

/// Plays a uniformly random empty cell every turn
#[derive(Debug, Clone)]
pub struct RandomMover {
    marker: Marker,
    rng: RandomIndex,
}

impl RandomMover {
    pub fn new(marker: Marker, seed: Option<u64>) -> Self {
        Self {
            marker,
            rng: RandomIndex::new(seed),
        }
    }
}

impl Marked for RandomMover {
    fn marker(&self) -> Marker {
        self.marker
    }
}

impl MoveSelector for RandomMover {
    fn select_move(&mut self, board: &BoardState) -> Option<usize> {
        self.rng.choose(&board.empty_cells())
    }

    fn name(&self) -> &str {
        "random"
    }
}
