//! Ports (trait boundaries) between the game core and its surroundings.
//!
//! The core owns these traits; display front ends, computer players and
//! match observers are adapters that implement them.

pub mod observer;
pub mod player;
pub mod renderer;

pub use observer::Observer;
pub use player::{Human, Marked, MoveSelector};
pub use renderer::Renderer;
