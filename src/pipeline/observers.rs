//! Observers for match runs
//!
//! Observers allow composable data collection during a match without coupling
//! the runner to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};

use super::match_runner::{GameRecord, MatchOutcome};
use crate::{Result, ports::Observer};

/// Progress bar observer - Shows match progress with a running W/D/L tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} D:{} L:{}", self.wins, self.draws, self.losses)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, record: &GameRecord) -> Result<()> {
        match record.outcome {
            MatchOutcome::AiWin => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::OpponentWin => self.losses += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(record.game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// JSONL observer - Writes one JSON object per finished game
pub struct JsonlObserver<W: Write> {
    writer: W,
}

impl JsonlObserver<BufWriter<File>> {
    /// Create a JSONL observer writing to a new file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Observer for JsonlObserver<W> {
    fn on_game_end(&mut self, record: &GameRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
