#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod cli;

use clap::Parser;
use std::process;

fn main() {
    let cli = cli::Cli::parse();
    bootstrap::init_logging();

    if let Err(err) = bootstrap::run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
