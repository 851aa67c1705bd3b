//! Autostage - stage modified and untracked files in one pass.

mod cli;
mod git;
mod logger;
mod stage;
mod utils;

use clap::{ColorChoice, Parser};
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    // Failures are printed, never propagated: the exit status stays zero.
    if let Err(e) = cli::stage::run(&cli) {
        log!("error"; "{e:#}");
    }
}
