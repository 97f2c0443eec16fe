//! Session configuration.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ai::Difficulty,
    error::Error,
    tictactoe::{Marker, board::MIN_SIZE},
};

/// Largest board side offered for play
pub const MAX_SIZE: usize = 8;

/// Configuration for one game session.
///
/// Out-of-range values are clamped rather than rejected: sides below 2 become
/// 2, sides above [`MAX_SIZE`] become [`MAX_SIZE`], and difficulty levels are
/// clamped into `1..=3` when parsed.
///
/// # Examples
///
/// ```
/// use tictac::app::GameConfig;
/// use tictac::ai::Difficulty;
/// use tictac::tictactoe::Marker;
///
/// let config = GameConfig::new(1)
///     .with_human_marker(Marker::O)
///     .with_difficulty(Difficulty::from_level(5))
///     .with_seed(42);
///
/// assert_eq!(config.size, 2);
/// assert_eq!(config.ai_marker(), Marker::X);
/// assert_eq!(config.difficulty, Difficulty::Unbeatable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side
    pub size: usize,
    /// Marker the human plays
    pub human_marker: Marker,
    /// Computer difficulty tier
    pub difficulty: Difficulty,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Whether the computer makes the first move
    pub ai_first: bool,
    /// Pause before each computer move, in milliseconds
    pub think_delay_ms: u64,
}

impl GameConfig {
    /// Create a configuration for the given side, clamped into range.
    ///
    /// Uses default values for other parameters:
    /// - Human marker: X
    /// - Difficulty: unbeatable
    /// - Seed: None (non-deterministic)
    /// - Human moves first, no think delay
    pub fn new(size: usize) -> Self {
        Self {
            size: Self::clamp_size(size),
            human_marker: Marker::X,
            difficulty: Difficulty::default(),
            seed: None,
            ai_first: false,
            think_delay_ms: 0,
        }
    }

    pub fn clamp_size(size: usize) -> usize {
        size.clamp(MIN_SIZE, MAX_SIZE)
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Self::clamp_size(size);
        self
    }

    pub fn with_human_marker(mut self, marker: Marker) -> Self {
        self.human_marker = marker;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_ai_first(mut self, ai_first: bool) -> Self {
        self.ai_first = ai_first;
        self
    }

    pub fn with_think_delay_ms(mut self, millis: u64) -> Self {
        self.think_delay_ms = millis;
        self
    }

    /// Marker the computer plays
    pub fn ai_marker(&self) -> Marker {
        self.human_marker.opponent()
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Bring every field into its valid range.
    pub fn normalized(mut self) -> Self {
        self.size = Self::clamp_size(self.size);
        self
    }

    /// Load a JSON configuration file; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config '{}'", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&text)?;
        Ok(config.normalized())
    }

    /// Write this configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| Error::Io {
            operation: format!("write config '{}'", path.display()),
            source,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(3)
    }
}
