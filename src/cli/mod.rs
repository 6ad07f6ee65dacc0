//! CLI module
//!
//! Command-line interface: `postman2swagger <source> <target> [options]`.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
