//! Subcommand implementations.

pub mod axes;
pub mod generate;
pub mod preset;
