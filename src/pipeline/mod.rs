//! Headless match pipeline
//!
//! This module provides:
//! - Batches of strategist-vs-baseline games driven through the game controller
//! - Observers recording progress and per-game results

pub mod match_runner;
pub mod observers;

pub use match_runner::{GameRecord, MatchOutcome, MatchRunner, MatchSummary, OpponentKind};
pub use observers::{JsonlObserver, ProgressObserver};

pub use crate::ports::Observer;
