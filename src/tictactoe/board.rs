//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::{Line, LineAnalyzer, LineId};

/// Smallest playable board side
pub const MIN_SIZE: usize = 2;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The marker occupying this cell, if any
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::X => Some(Marker::X),
            Cell::O => Some(Marker::O),
            Cell::Empty => None,
        }
    }
}

/// A player's symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// Get the opposing marker
    pub fn opponent(self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Convert marker to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Marker::X => Cell::X,
            Marker::O => Cell::O,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Marker {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Marker::X),
            "O" | "o" => Ok(Marker::O),
            other => Err(crate::Error::InvalidMarker {
                input: other.to_string(),
            }),
        }
    }
}

/// Grid of cells plus the derived row, column and diagonal lines.
///
/// The derived lines are updated inside every mutation, so they always agree
/// with `cells`. Occupancy is not checked here: callers guard against marking
/// an occupied cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    size: usize,
    cells: Vec<Cell>,
    lines: Vec<Line>,
}

impl BoardState {
    /// Create an empty board. Sides below [`MIN_SIZE`] are raised to it.
    pub fn new(size: usize) -> Self {
        let size = size.max(MIN_SIZE);
        let lines = LineId::all(size)
            .into_iter()
            .map(|id| Line::empty(id, size))
            .collect();
        BoardState {
            size,
            cells: vec![Cell::Empty; size * size],
            lines,
        }
    }

    /// Create a board from a full row-major cell listing.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not the square of a side >= 2.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, crate::Error> {
        let size = side_for(cells.len()).ok_or_else(|| crate::Error::NonSquareBoard {
            cells: cells.len(),
            context: cells.iter().map(|c| c.to_char()).collect(),
        })?;
        let mut board = BoardState::new(size);
        for (index, cell) in cells.into_iter().enumerate() {
            if cell != Cell::Empty {
                board.set(index, cell);
            }
        }
        Ok(board)
    }

    /// Create a board from its text form, e.g. `"XO./.X./..O"`.
    ///
    /// Whitespace and `/` separators are ignored; the side is inferred from
    /// the number of remaining characters.
    ///
    /// # Errors
    ///
    /// Returns error if any character is not a cell, or the cell count is not
    /// a perfect square of at least four.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let min_cells = MIN_SIZE * MIN_SIZE;
        if chars.len() < min_cells {
            return Err(crate::Error::InvalidBoardLength {
                expected: min_cells,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = Vec::with_capacity(chars.len());
        for (position, &character) in chars.iter().enumerate() {
            let cell = Cell::from_char(character).ok_or_else(|| {
                crate::Error::InvalidCellCharacter {
                    character,
                    position,
                    context: s.to_string(),
                }
            })?;
            cells.push(cell);
        }

        Self::from_cells(cells).map_err(|_| crate::Error::NonSquareBoard {
            cells: chars.len(),
            context: s.to_string(),
        })
    }

    /// Board side `N`
    pub fn size(&self) -> usize {
        self.size
    }

    /// All `N²` cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Derived lines in slot order (rows, columns, main, anti)
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get cell at position
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Place `marker` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board.
    pub fn mark_cell(&mut self, index: usize, marker: Marker) {
        self.set(index, marker.to_cell());
    }

    /// Empty the cell at `index`, undoing a previous [`mark_cell`](Self::mark_cell).
    pub fn clear_cell(&mut self, index: usize) {
        self.set(index, Cell::Empty);
    }

    fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
        for (slot, offset) in LineId::through(index, self.size) {
            self.lines[slot].set(offset, cell);
        }
    }

    /// Check if a position is on the board and empty
    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.cells.get(index) == Some(&Cell::Empty)
    }

    /// Get all empty positions in ascending order
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Lines entirely held by `marker`
    pub fn winning_lines(&self, marker: Marker) -> Vec<LineId> {
        LineAnalyzer::winning_lines(&self.lines, marker)
    }

    /// Lines one `marker` short of a win, with the missing cell empty
    pub fn almost_winning_lines(&self, marker: Marker) -> Vec<LineId> {
        LineAnalyzer::almost_winning_lines(&self.lines, marker)
    }

    pub fn has_won(&self, marker: Marker) -> bool {
        LineAnalyzer::has_won(&self.lines, marker)
    }

    /// Board index of the empty cell on `line`
    pub fn empty_cell_in(&self, line: LineId) -> Option<usize> {
        LineAnalyzer::empty_position(&self.lines, line, self.size)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Marker> {
        if self.has_won(Marker::X) {
            Some(Marker::X)
        } else if self.has_won(Marker::O) {
            Some(Marker::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.has_won(Marker::X) || self.has_won(Marker::O) || self.is_full()
    }
}

fn side_for(cell_count: usize) -> Option<usize> {
    (MIN_SIZE..)
        .take_while(|side| side * side <= cell_count)
        .find(|side| side * side == cell_count)
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(self.size) && i + 1 < self.cells.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
