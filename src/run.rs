//! Application run modes: logger init, one-shot commands, TUI launch.

use std::io;

use crate::cli::{Args, Commands};
use crate::core;
use crate::core::cli::RowsRequest;
use crate::core::output::Sink;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui()
        && let Some(path) = core::paths::log_path()
    {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run a subcommand to completion. Only commands that render read the environment config.
pub fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Render {
            input,
            render,
            output,
            copy,
        } => {
            let req = RowsRequest {
                preset: input.preset.as_deref(),
                file: input.file.as_deref(),
                rows: &input.rows,
                format: input.format.map(Into::into),
            };
            let sink = match (output, copy) {
                (Some(path), _) => Sink::File(path),
                (None, true) => Sink::Clipboard,
                (None, false) => Sink::Stdout,
            };
            let config = core::config::load()?;
            core::cli::run_render(&req, &render.apply(config.render), &sink)
        }
        Commands::Normalize { input, json } => {
            let req = RowsRequest {
                preset: input.preset.as_deref(),
                file: input.file.as_deref(),
                rows: &input.rows,
                format: input.format.map(Into::into),
            };
            core::cli::run_normalize(&req, json)
        }
        Commands::Presets => {
            core::cli::run_presets();
            Ok(())
        }
        Commands::Config => {
            core::cli::run_config(&core::config::load()?);
            Ok(())
        }
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Args::command();
            crate::cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
            Ok(())
        }
    }
}

/// Launch the TUI. Prints the last generated command after the terminal is restored.
pub fn launch_tui() -> Result<(), Box<dyn std::error::Error>> {
    let config = core::config::load()?;
    let last_command = crate::tui::run(&config)?;
    if let Some(text) = last_command {
        println!("{}", text);
    }
    Ok(())
}
