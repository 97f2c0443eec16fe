//! Player ports - the capabilities a participant in a game exposes
//!
//! Both sides of a game hold a marker. Only computer-driven sides also choose
//! their own moves; the human side's moves arrive from outside through
//! [`GameController::apply_human_move`](crate::tictactoe::GameController::apply_human_move).

use crate::tictactoe::{BoardState, Marker};

/// Anything that plays under a marker.
pub trait Marked {
    fn marker(&self) -> Marker;
}

/// A participant that picks its own moves.
///
/// # Examples
///
/// ```
/// use tictac::{
///     ports::{Marked, MoveSelector},
///     tictactoe::{BoardState, Marker},
/// };
///
/// struct FirstEmpty(Marker);
///
/// impl Marked for FirstEmpty {
///     fn marker(&self) -> Marker {
///         self.0
///     }
/// }
///
/// impl MoveSelector for FirstEmpty {
///     fn select_move(&mut self, board: &BoardState) -> Option<usize> {
///         board.empty_cells().first().copied()
///     }
/// }
///
/// let mut player = FirstEmpty(Marker::O);
/// assert_eq!(player.select_move(&BoardState::new(3)), Some(0));
/// ```
pub trait MoveSelector: Marked {
    /// Choose an empty cell on `board`, or `None` when the board is full.
    fn select_move(&mut self, board: &BoardState) -> Option<usize>;

    /// Name used in logs and reports
    fn name(&self) -> &str {
        "computer"
    }
}

/// The human side: a marker and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Human {
    marker: Marker,
}

impl Human {
    pub fn new(marker: Marker) -> Self {
        Self { marker }
    }
}

impl Marked for Human {
    fn marker(&self) -> Marker {
        self.marker
    }
}
