//! Common test utilities for the tictac test suite.
//!
//! Boards here are arbitrary fillings, not necessarily reachable positions;
//! line analysis has to hold for any of them.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tictac::{BoardState, Cell, LineId, Marker};

/// A board of side `size` with every cell drawn uniformly from empty, X and O.
pub fn random_board(size: usize, rng: &mut StdRng) -> BoardState {
    let mut board = BoardState::new(size);
    for index in 0..size * size {
        match rng.random_range(0..3) {
            0 => {}
            1 => board.mark_cell(index, Marker::X),
            _ => board.mark_cell(index, Marker::O),
        }
    }
    board
}

/// Deterministic generator for a test case
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Count `marker` cells and empty cells on `line`, reading straight from the grid.
pub fn scan_line(board: &BoardState, line: LineId, marker: Marker) -> (usize, usize) {
    line.positions(board.size())
        .into_iter()
        .fold((0, 0), |(own, empty), index| match board.get(index) {
            Cell::Empty => (own, empty + 1),
            cell if cell == marker.to_cell() => (own + 1, empty),
            _ => (own, empty),
        })
}
