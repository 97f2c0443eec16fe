//! Session flags shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::{Result, ai::Difficulty, app::GameConfig, tictactoe::Marker};

/// Flags describing a game session.
///
/// Values given on the command line override those read from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Board side (clamped to 2-8)
    #[arg(long, short = 's')]
    pub size: Option<usize>,

    /// Marker for the human side (`x` or `o`)
    #[arg(long, short = 'm')]
    pub marker: Option<Marker>,

    /// Computer difficulty: easy, hard, unbeatable, or 1-3
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SessionArgs {
    /// Merge the optional config file with explicit flags.
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        if let Some(marker) = self.marker {
            config = config.with_human_marker(marker);
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config.normalized())
    }
}
