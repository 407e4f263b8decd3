//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `modelforge tree
//! -vv shop.json` and `modelforge -vv tree shop.json` are equivalent.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// `-v` logs each compile section, `-vv` adds per-file detail,
    /// `-vvv` traces everything. Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors
    -v      - Info level (one line per compile section)
    -vv     - Debug level (section sizes, model details)
    -vvv    - Trace level"
    )]
    pub verbose: u8,

    /// Suppress status output. Artifact content printed by `show`, `tree`
    /// and `routes` is still written.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes. Honours `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Explicit configuration file; must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        env = "MODELFORGE_CONFIG",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How status messages are rendered.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI renders status output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Symbols and colours.
    Human,
    /// No colours, no symbols.
    Plain,
    /// One JSON object per result; status lines are suppressed.
    Json,
}
