//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Autostage: stage modified and untracked files in one pass
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository directory to stage in (default: current directory)
    #[arg(default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub path: PathBuf,

    /// List what would be staged without touching the index
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}
