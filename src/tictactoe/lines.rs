//! Winning line analysis for N×N boards
//!
//! A board of side `n` has `2n + 2` lines: every row, every column and the two
//! full diagonals. Lines are stored in a fixed slot order (rows, columns, main
//! diagonal, anti-diagonal) so a cell index maps straight to the slots it
//! belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Cell, Marker};

/// Stable identity of a line on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineId {
    Row(usize),
    Col(usize),
    MainDiag,
    AntiDiag,
}

impl LineId {
    /// All lines of a board of the given side, in slot order
    pub fn all(size: usize) -> Vec<LineId> {
        let mut ids = Vec::with_capacity(2 * size + 2);
        ids.extend((0..size).map(LineId::Row));
        ids.extend((0..size).map(LineId::Col));
        ids.push(LineId::MainDiag);
        ids.push(LineId::AntiDiag);
        ids
    }

    /// Board index of the `offset`-th cell along this line
    pub fn position(self, offset: usize, size: usize) -> usize {
        match self {
            LineId::Row(row) => row * size + offset,
            LineId::Col(col) => offset * size + col,
            LineId::MainDiag => offset * size + offset,
            LineId::AntiDiag => offset * size + (size - 1 - offset),
        }
    }

    /// Board indices covered by this line, in line order
    pub fn positions(self, size: usize) -> Vec<usize> {
        (0..size).map(|offset| self.position(offset, size)).collect()
    }

    /// `(slot, offset)` pairs of every line passing through `index`.
    pub(super) fn through(index: usize, size: usize) -> impl Iterator<Item = (usize, usize)> {
        let row = index / size;
        let col = index % size;
        [
            Some((row, col)),
            Some((size + col, row)),
            (row == col).then_some((2 * size, row)),
            (row + col == size - 1).then_some((2 * size + 1, row)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineId::Row(i) => write!(f, "row{i}"),
            LineId::Col(i) => write!(f, "col{i}"),
            LineId::MainDiag => write!(f, "mainDiag"),
            LineId::AntiDiag => write!(f, "antiDiag"),
        }
    }
}

/// Cell values along one line, kept in step with the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    cells: Vec<Cell>,
}

impl Line {
    pub(super) fn empty(id: LineId, size: usize) -> Self {
        Self {
            id,
            cells: vec![Cell::Empty; size],
        }
    }

    pub(super) fn set(&mut self, offset: usize, cell: Cell) {
        self.cells[offset] = cell;
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Offset of the first empty cell along the line
    fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|&c| c == Cell::Empty)
    }
}

/// Line queries over a board's derived lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Lines where every cell holds `marker`
    pub fn winning_lines(lines: &[Line], marker: Marker) -> Vec<LineId> {
        let target = marker.to_cell();
        lines
            .iter()
            .filter(|line| line.cells.iter().all(|&c| c == target))
            .map(Line::id)
            .collect()
    }

    /// Lines holding `marker` in all but one cell, with that cell empty
    pub fn almost_winning_lines(lines: &[Line], marker: Marker) -> Vec<LineId> {
        let target = marker.to_cell();
        lines
            .iter()
            .filter(|line| {
                let size = line.cells.len();
                line.count(target) == size - 1 && line.count(Cell::Empty) == 1
            })
            .map(Line::id)
            .collect()
    }

    pub fn has_won(lines: &[Line], marker: Marker) -> bool {
        let target = marker.to_cell();
        lines
            .iter()
            .any(|line| line.cells.iter().all(|&c| c == target))
    }

    /// Board index of the first empty cell on the given line
    pub fn empty_position(lines: &[Line], id: LineId, size: usize) -> Option<usize> {
        lines
            .iter()
            .find(|line| line.id == id)
            .and_then(Line::first_empty)
            .map(|offset| id.position(offset, size))
    }
}
