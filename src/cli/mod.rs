//! CLI infrastructure for terminal play and computer-vs-baseline matches.

pub mod commands;
pub mod config;
pub mod output;
