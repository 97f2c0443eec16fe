//! Subcommands of the `tictac` binary

pub mod bench;
pub mod play;
