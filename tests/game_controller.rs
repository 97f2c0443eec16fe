//! Full games through the controller, observed with a recording renderer.

use tictac::{
    BoardState, Difficulty, GameConfig, GameController, GameState, LineId, Marker, Strategist,
    adapters::{RecordingRenderer, RenderEvent},
    ports::MoveSelector,
};

fn controller(config: GameConfig) -> GameController<RecordingRenderer> {
    let mut game = GameController::new(&config, RecordingRenderer::new());
    game.start();
    game
}

/// Let `player` take the human side until the game ends.
fn play_out(game: &mut GameController<RecordingRenderer>, player: &mut dyn MoveSelector) {
    while !game.is_over() {
        let index = player.select_move(game.board()).unwrap();
        assert!(game.apply_human_move(index).is_some());
    }
}

mod perfect_play {
    use super::*;

    #[test]
    fn test_corner_opening_against_unbeatable_is_drawn() {
        let mut game = controller(GameConfig::new(3).with_seed(3));
        game.apply_human_move(0).unwrap();
        assert_eq!(game.board().get(4), Marker::O.to_cell());

        let mut human = Strategist::new(Marker::X, Difficulty::Unbeatable, Some(3));
        play_out(&mut game, &mut human);

        assert_eq!(game.state(), GameState::Draw);
        assert_eq!(game.renderer().outcome(), Some(&RenderEvent::Draw));
    }

    #[test]
    fn test_unbeatable_never_loses_an_opening() {
        for opening in 0..9 {
            let mut game = controller(GameConfig::new(3).with_seed(opening as u64));
            game.apply_human_move(opening).unwrap();
            let mut human = Strategist::new(Marker::X, Difficulty::Unbeatable, None);
            play_out(&mut game, &mut human);
            assert_eq!(game.state(), GameState::Draw, "opening at {opening}");
        }
    }

    #[test]
    fn test_careless_play_is_punished() {
        // The human always takes the lowest free cell.
        let mut game = controller(GameConfig::new(3));
        for expected_reply in [4, 2] {
            let index = game.board().empty_cells()[0];
            let turn = game.apply_human_move(index).unwrap();
            assert_eq!(turn.ai_move, Some(expected_reply));
        }
        let turn = game.apply_human_move(3).unwrap();
        assert_eq!(turn.ai_move, Some(6));
        assert_eq!(turn.state, GameState::Won(Marker::O));
        assert_eq!(game.winning_lines(), vec![LineId::AntiDiag]);
    }
}

mod session {
    use super::*;

    #[test]
    fn test_renders_start_then_one_board_per_move() {
        let mut game = controller(GameConfig::new(3).with_seed(1));
        assert_eq!(game.renderer().board_count(), 1);

        game.apply_human_move(4).unwrap();
        assert_eq!(game.renderer().board_count(), 3);
        assert_eq!(game.renderer().last_board(), Some(game.board()));
    }

    #[test]
    fn test_taken_cell_changes_nothing() {
        let mut game = controller(GameConfig::new(3).with_seed(2));
        let turn = game.apply_human_move(0).unwrap();
        let reply = turn.ai_move.unwrap();
        let before = game.board().clone();
        let events = game.renderer().events().len();

        assert!(game.apply_human_move(0).is_none());
        assert!(game.apply_human_move(reply).is_none());
        assert!(game.apply_human_move(9).is_none());
        assert_eq!(game.board(), &before);
        assert_eq!(game.renderer().events().len(), events);
    }

    #[test]
    fn test_human_win_is_reported_with_its_lines() {
        // On 2x2 the opener wins with any second cell.
        let mut game = controller(GameConfig::new(2).with_seed(4));
        let turn = game.apply_human_move(0).unwrap();
        let second = game.board().empty_cells()[0];
        assert_ne!(Some(second), turn.ai_move);

        let turn = game.apply_human_move(second).unwrap();
        assert_eq!(turn.state, GameState::Won(Marker::X));
        assert_eq!(turn.ai_move, None);

        let lines = game.board().winning_lines(Marker::X);
        assert!(!lines.is_empty());
        assert_eq!(
            game.renderer().outcome(),
            Some(&RenderEvent::Win {
                winner: Marker::X,
                lines,
            })
        );

        let remaining = game.board().empty_cells();
        assert!(game.apply_human_move(remaining[0]).is_none());
    }

    #[test]
    fn test_computer_opens_when_asked() {
        let config = GameConfig::new(3).with_seed(8).with_ai_first(true);
        let mut game = GameController::new(&config, RecordingRenderer::new());
        let opening = game.start().unwrap();
        assert_eq!(game.board().get(opening), Marker::O.to_cell());
        assert_eq!(game.board().occupied_count(), 1);
        assert_eq!(game.start(), None);
    }

    #[test]
    fn test_o_side_human_faces_an_x_computer() {
        let config = GameConfig::new(3)
            .with_human_marker(Marker::O)
            .with_seed(6);
        let mut game = controller(config);
        assert_eq!(game.ai_marker(), Marker::X);
        let turn = game.apply_human_move(4).unwrap();
        assert_eq!(game.board().get(4), Marker::O.to_cell());
        assert_eq!(
            game.board().get(turn.ai_move.unwrap()),
            Marker::X.to_cell()
        );
    }
}

mod config {
    use super::*;

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let game = controller(GameConfig::new(1));
        assert_eq!(game.board().size(), 2);

        let game = controller(GameConfig::new(3).with_difficulty(Difficulty::from_level(5)));
        assert_eq!(game.difficulty(), Difficulty::Unbeatable);
    }

    #[test]
    fn test_saved_config_drives_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        GameConfig::new(4)
            .with_difficulty(Difficulty::Hard)
            .with_human_marker(Marker::O)
            .save(&path)
            .unwrap();

        let config = GameConfig::load(&path).unwrap();
        let game = controller(config);
        assert_eq!(game.board(), &BoardState::new(4));
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.human_marker(), Marker::O);
    }

    #[test]
    fn test_difficulty_level_in_json_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        std::fs::write(&path, r#"{"size": 12, "difficulty": 9}"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.difficulty, Difficulty::Unbeatable);
        let game = controller(config);
        assert_eq!(game.board().size(), tictac::app::MAX_SIZE);
    }
}
