//! Renderer port - how the game reports itself to a display
//!
//! The controller never draws anything. After every accepted move it hands the
//! board to a renderer, and on termination it reports either the winning lines
//! or a draw.

use crate::tictactoe::{BoardState, LineId, Marker};

/// Display collaborator driven by [`GameController`](crate::tictactoe::GameController).
///
/// # Event Sequence
///
/// 1. `render_board` once when the game starts and after every accepted move
/// 2. At most one of `render_win` / `render_draw`, after which no further
///    events arrive
pub trait Renderer {
    /// Show the current board.
    fn render_board(&mut self, board: &BoardState);

    /// Show a win by `winner` along the named lines.
    fn render_win(&mut self, winner: Marker, lines: &[LineId]);

    /// Show a drawn game.
    fn render_draw(&mut self);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_board(&mut self, board: &BoardState) {
        (**self).render_board(board);
    }

    fn render_win(&mut self, winner: Marker, lines: &[LineId]) {
        (**self).render_win(winner, lines);
    }

    fn render_draw(&mut self) {
        (**self).render_draw();
    }
}
