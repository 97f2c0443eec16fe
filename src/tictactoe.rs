//! N×N tic-tac-toe: board, line analysis and the game controller

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, MIN_SIZE, Marker};
pub use game::{GameController, GameState, Turn};
pub use lines::{Line, LineAnalyzer, LineId};
