//! Headless matches of the computer against baseline opponents

use std::sync::{Arc, Mutex};

use tictac::{
    Difficulty, GameConfig, Result,
    pipeline::{GameRecord, JsonlObserver, MatchOutcome, MatchRunner, MatchSummary, Observer, OpponentKind},
};

/// Observer sharing what it saw with the test body
#[derive(Clone, Default)]
struct Collecting {
    seen: Arc<Mutex<Vec<MatchOutcome>>>,
    started: Arc<Mutex<Option<usize>>>,
}

impl Observer for Collecting {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        *self.started.lock().unwrap() = Some(total_games);
        Ok(())
    }

    fn on_game_end(&mut self, record: &GameRecord) -> Result<()> {
        self.seen.lock().unwrap().push(record.outcome);
        Ok(())
    }
}

#[test]
fn test_unbeatable_against_itself_always_draws() {
    let config = GameConfig::new(3).with_seed(42);
    let mut runner = MatchRunner::new(
        config,
        OpponentKind::Strategist(Difficulty::Unbeatable),
    )
    .alternate_first_move(true);

    let records = runner.run(10).unwrap();
    assert!(records.iter().all(|r| r.outcome == MatchOutcome::Draw));
    assert!(records.iter().all(|r| r.moves == 9));
}

#[test]
fn test_unbeatable_never_loses_to_random() {
    let config = GameConfig::new(3).with_seed(2024);
    let mut runner = MatchRunner::new(config, OpponentKind::Random).alternate_first_move(true);

    let records = runner.run(40).unwrap();
    let summary = MatchSummary::from_records(&runner, &records);
    assert_eq!(summary.opponent_wins, 0);
    assert!(summary.ai_wins > 0);
    assert_eq!(summary.ai_wins + summary.draws, 40);
}

#[test]
fn test_hard_never_loses_to_random_on_two_by_two_when_opening() {
    // Whoever opens on 2x2 wins on their second move.
    let config = GameConfig::new(2)
        .with_seed(5)
        .with_difficulty(Difficulty::Hard)
        .with_ai_first(true);
    let mut runner = MatchRunner::new(config, OpponentKind::Random);

    let records = runner.run(10).unwrap();
    assert!(records.iter().all(|r| r.outcome == MatchOutcome::AiWin));
    assert!(records.iter().all(|r| r.moves == 3));
}

#[test]
fn test_observers_see_every_game() {
    let collecting = Collecting::default();
    let config = GameConfig::new(3).with_seed(9).with_difficulty(Difficulty::Easy);
    let mut runner = MatchRunner::new(config, OpponentKind::Random)
        .with_observer(Box::new(collecting.clone()));

    let records = runner.run(12).unwrap();
    let seen = collecting.seen.lock().unwrap();
    assert_eq!(*collecting.started.lock().unwrap(), Some(12));
    assert_eq!(seen.len(), 12);
    assert!(
        records
            .iter()
            .zip(seen.iter())
            .all(|(record, &outcome)| record.outcome == outcome)
    );
}

#[test]
fn test_jsonl_record_has_one_line_per_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");

    let config = GameConfig::new(4).with_seed(3).with_difficulty(Difficulty::Hard);
    let mut runner = MatchRunner::new(config, OpponentKind::Random)
        .with_observer(Box::new(JsonlObserver::create(&path).unwrap()));
    let records = runner.run(5).unwrap();
    drop(runner);

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<GameRecord> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, records);
}
