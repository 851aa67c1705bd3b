//! Command-line interface module.

mod args;
pub mod stage;

pub use args::Cli;
