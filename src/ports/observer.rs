//! Observer port - watching a batch of computer games
//!
//! Observers collect data while a [`MatchRunner`](crate::pipeline::MatchRunner)
//! plays many games, without the runner knowing about progress bars or
//! statistics.

use crate::{Result, pipeline::GameRecord};

/// Observer trait for monitoring a match
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - once at the beginning
/// 2. `on_game_end(record)` - after each finished game
/// 3. `on_match_end()` - once at the end
///
/// # Examples
///
/// ```
/// use tictac::{pipeline::GameRecord, ports::Observer};
///
/// struct LengthCounter {
///     total_moves: usize,
/// }
///
/// impl Observer for LengthCounter {
///     fn on_game_end(&mut self, record: &GameRecord) -> tictac::Result<()> {
///         self.total_moves += record.moves;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called when the match starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game ends.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to record game outcomes.
    fn on_game_end(&mut self, _record: &GameRecord) -> Result<()> {
        Ok(())
    }

    /// Called when every game has been played.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to finalize outputs or display summaries.
    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
