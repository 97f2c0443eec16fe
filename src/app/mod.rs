//! Application layer: session configuration.

pub mod config;

pub use config::{GameConfig, MAX_SIZE};
