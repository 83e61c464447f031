//! Variable font displayer CLI library.

pub mod args;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod io;
