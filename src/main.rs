//! # sage-visu
//!
//! Enter linear inequalities over (x1, x2, x3) and turn them into a SageMath
//! `Polyhedron(ieqs = [...]).plot()` command for a Sage cell.
//!
//! ## Modes
//! - Interactive row form (TUI) when no subcommand is given
//! - `render` / `normalize` for one-shot use from files, stdin or `--row`
//! - `presets`, `config`, `completions`

mod cli;
mod core;
mod run;
mod tui;

use clap::Parser;
use dotenv::dotenv;

use cli::Args;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    let result = match args.command {
        Some(command) => run::run_command(command),
        None => run::launch_tui(),
    };

    // Print user-friendly message; exit uses Display not Debug
    if let Err(e) = result {
        log::debug!("exiting with error: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
