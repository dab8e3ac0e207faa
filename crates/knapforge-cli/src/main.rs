//! Command-line knapsack solver.
//!
//! ```bash
//! knapforge --catalogue items.txt --capacity 50
//! knapforge --catalogue items.txt --capacity 50 --filter lamp --config solver.toml
//! ```

mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    knapforge::console::init(&args.log_level);

    match cli::run(&args, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::from(1)
        }
    }
}
