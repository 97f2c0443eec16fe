//! Plain-text renderer for terminal play.

use std::io::{self, Stdout, Write};

use tracing::warn;

use crate::{
    ports::Renderer,
    tictactoe::{BoardState, Cell, LineId, Marker},
};

/// Draws the board as a text grid on any writer.
///
/// Empty cells show their 1-based number so a player can type it back.
///
/// ```text
///  X | 2 | 3
/// ---+---+---
///  4 | O | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
pub struct TerminalRenderer<W: Write> {
    out: W,
    size: usize,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, size: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_board(&mut self, board: &BoardState) -> io::Result<()> {
        let size = board.size();
        let width = (size * size).to_string().len();
        let separator = vec!["-".repeat(width + 2); size].join("+");

        writeln!(self.out)?;
        for row in 0..size {
            let cells: Vec<String> = (0..size)
                .map(|col| {
                    let index = row * size + col;
                    let label = match board.get(index) {
                        Cell::Empty => (index + 1).to_string(),
                        cell => cell.to_char().to_string(),
                    };
                    format!(" {label:>width$} ")
                })
                .collect();
            writeln!(self.out, "{}", cells.join("|"))?;
            if row + 1 < size {
                writeln!(self.out, "{separator}")?;
            }
        }
        self.out.flush()
    }

    fn write_win(&mut self, winner: Marker, lines: &[LineId]) -> io::Result<()> {
        let described: Vec<String> = lines
            .iter()
            .map(|line| {
                let cells: Vec<String> = line
                    .positions(self.size)
                    .iter()
                    .map(|p| (p + 1).to_string())
                    .collect();
                format!("{line} ({})", cells.join(", "))
            })
            .collect();
        writeln!(self.out, "\n{winner} wins along {}", described.join("; "))?;
        self.out.flush()
    }

    fn write_draw(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nIt's a draw.")?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_board(&mut self, board: &BoardState) {
        self.size = board.size();
        if let Err(e) = self.write_board(board) {
            warn!(error = %e, "failed to render board");
        }
    }

    fn render_win(&mut self, winner: Marker, lines: &[LineId]) {
        if let Err(e) = self.write_win(winner, lines) {
            warn!(error = %e, "failed to render win");
        }
    }

    fn render_draw(&mut self) {
        if let Err(e) = self.write_draw() {
            warn!(error = %e, "failed to render draw");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(board: &BoardState) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_board(board);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_renders_numbers_for_empty_cells() {
        let board = BoardState::from_string("X../.O./...").unwrap();
        let text = render(&board);
        assert_eq!(
            text,
            "\n X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_wide_boards_pad_cells() {
        let text = render(&BoardState::new(4));
        let first_row = text.lines().nth(1).unwrap();
        assert_eq!(first_row, "  1 |  2 |  3 |  4 ");
    }

    #[test]
    fn test_win_message_names_lines() {
        let board = BoardState::from_string("XXX/OO./...").unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_board(&board);
        renderer.render_win(Marker::X, &board.winning_lines(Marker::X));
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.ends_with("X wins along row0 (1, 2, 3)\n"), "{text}");
    }
}
