//! N×N tic-tac-toe against a computer opponent
//!
//! This crate provides:
//! - Board state with incrementally maintained rows, columns and diagonals
//! - Win and near-win line detection for any board side
//! - Minimax search with alpha-beta pruning
//! - A tiered computer player (easy, hard, unbeatable)
//! - A game controller reporting to a pluggable renderer
//! - Terminal play and headless benchmark matches

pub mod adapters;
pub mod ai;
pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use ai::{Difficulty, SearchEngine, SearchResult, Strategist};
pub use app::GameConfig;
pub use error::{Error, Result};
pub use tictactoe::{BoardState, Cell, GameController, GameState, LineId, Marker};
