//! `lockwatch` command line: argument parsing, command execution and output
//! rendering.

pub mod cli;
pub mod commands;
pub mod output;

pub use cli::{Cli, Commands};
pub use commands::run;
