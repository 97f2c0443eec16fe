//! Adapters implementing domain ports.
//!
//! Renderers for terminal and headless play, and a baseline random player.

pub mod random_mover;
pub mod recording_renderer;
pub mod terminal_renderer;

pub use random_mover::RandomMover;
pub use recording_renderer::{RecordingRenderer, RenderEvent};
pub use terminal_renderer::TerminalRenderer;
