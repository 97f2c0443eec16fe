//! In-memory renderer that records every event it receives.
//!
//! Used for headless games (benchmarks) and for asserting on what the
//! controller reported.

use crate::{
    ports::Renderer,
    tictactoe::{BoardState, LineId, Marker},
};

/// One call made on a [`Renderer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Board(BoardState),
    Win { winner: Marker, lines: Vec<LineId> },
    Draw,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Number of board renders seen
    pub fn board_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Board(_)))
            .count()
    }

    /// Most recently rendered board
    pub fn last_board(&self) -> Option<&BoardState> {
        self.events.iter().rev().find_map(|e| match e {
            RenderEvent::Board(board) => Some(board),
            _ => None,
        })
    }

    /// The terminal event, if the game has ended
    pub fn outcome(&self) -> Option<&RenderEvent> {
        self.events
            .iter()
            .rev()
            .find(|e| !matches!(e, RenderEvent::Board(_)))
    }
}

impl Renderer for RecordingRenderer {
    fn render_board(&mut self, board: &BoardState) {
        self.events.push(RenderEvent::Board(board.clone()));
    }

    fn render_win(&mut self, winner: Marker, lines: &[LineId]) {
        self.events.push(RenderEvent::Win {
            winner,
            lines: lines.to_vec(),
        });
    }

    fn render_draw(&mut self) {
        self.events.push(RenderEvent::Draw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut renderer = RecordingRenderer::new();
        let board = BoardState::new(3);
        renderer.render_board(&board);
        renderer.render_draw();

        assert_eq!(renderer.events().len(), 2);
        assert_eq!(renderer.board_count(), 1);
        assert_eq!(renderer.last_board(), Some(&board));
        assert_eq!(renderer.outcome(), Some(&RenderEvent::Draw));
    }

    #[test]
    fn test_no_outcome_while_playing() {
        let mut renderer = RecordingRenderer::new();
        renderer.render_board(&BoardState::new(3));
        assert!(renderer.outcome().is_none());
    }
}
