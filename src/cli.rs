//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::command::{Convention, RenderOptions};
use crate::core::source::Format;

const AFTER_HELP: &str = "\
EXAMPLES:
  sage-visu                                     Launch the interactive row form
  sage-visu render -r \"1 0 0 <= 2\" -r \"0 1 0 >= -1\"
                                                Print the Polyhedron command
  sage-visu render rows.txt --copy              Copy the command to the clipboard
  sage-visu render - < rows.json                Read JSON rows from stdin
  sage-visu render --preset cube --convention offset
                                                Render a built-in example
  sage-visu normalize rows.txt --json           Print canonical constraints as JSON
  sage-visu presets                             List built-in examples
  sage-visu completions bash                    Generate bash completions

ROW FORMAT:
  a b c SIGN rhs    one inequality a*x1 + b*x2 + c*x3 SIGN rhs per line,
                    SIGN is <=, >= or = (also ≤ and ≥); '#' starts a comment

CONVENTIONS:
  bound     (default) a.x <= b emits [-b,-a], a.x >= b emits [b,a]
  offset    negates the first entry; Sage reads [b,a] as b + a.x >= 0, so
            this is the one whose plot matches the rows (presets included)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Turn linear inequalities into a SageMath Polyhedron plot command",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the Polyhedron command for a set of inequalities
    Render {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        render: RenderArgs,
        /// Write the command to a file instead of stdout
        #[arg(short = 'o', long, value_name = "FILE", conflicts_with = "copy")]
        output: Option<PathBuf>,
        /// Copy the command to the system clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },
    /// Print the canonical constraints, one per line
    Normalize {
        #[command(flatten)]
        input: InputArgs,
        /// Print a JSON array instead of plain tuples
        #[arg(long)]
        json: bool,
    },
    /// List built-in example systems
    Presets,
    /// Show the effective configuration and paths
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

/// Where rows come from. Sources combine in order: preset, file, then `--row`.
#[derive(ClapArgs, Debug, Default)]
pub struct InputArgs {
    /// File with one row per line, or a JSON array ('-' reads stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Inline row, e.g. "1 0 0 <= 2" (repeatable)
    #[arg(short = 'r', long = "row", value_name = "ROW")]
    pub rows: Vec<String>,

    /// Start from a built-in preset (see `presets`)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Input format (detected from the content otherwise)
    #[arg(long, value_parser = clap::value_parser!(FormatArg))]
    pub format: Option<FormatArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for Format {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => Format::Text,
            FormatArg::Json => Format::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ConventionArg {
    /// Canonical tuple as-is: [-b,-a] for a·x <= b, [b,a] for a·x >= b
    Bound,
    /// Sage `b + a·x >= 0` tuple: [b,-a] for a·x <= b, [-b,a] for a·x >= b
    Offset,
}

impl From<ConventionArg> for Convention {
    fn from(c: ConventionArg) -> Self {
        match c {
            ConventionArg::Bound => Convention::Bound,
            ConventionArg::Offset => Convention::Offset,
        }
    }
}

/// Output shape flags; override the environment configuration.
#[derive(ClapArgs, Debug, Default)]
pub struct RenderArgs {
    /// Tuple convention for the ieqs list
    #[arg(long, value_parser = clap::value_parser!(ConventionArg))]
    pub convention: Option<ConventionArg>,

    /// Do not emit a comma after the last tuple
    #[arg(long)]
    pub no_trailing_comma: bool,

    /// Omit the `.plot()` suffix
    #[arg(long)]
    pub no_plot: bool,
}

impl RenderArgs {
    /// Apply the flags on top of configured options.
    pub fn apply(&self, mut opts: RenderOptions) -> RenderOptions {
        if let Some(c) = self.convention {
            opts.convention = c.into();
        }
        if self.no_trailing_comma {
            opts.trailing_comma = false;
        }
        if self.no_plot {
            opts.plot = false;
        }
        opts
    }
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when no subcommand is given and the TUI will own the terminal.
    pub fn is_tui(&self) -> bool {
        self.command.is_none()
    }
}
