//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modelforge",
    bin_name = "modelforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Compile system models into project artifacts",
    long_about = "ModelForge turns an abstract system model (entities, endpoints, \
                  pages, infrastructure) into schemas, stub server and client \
                  files, documentation and diagrams.",
    after_help = "EXAMPLES:\n\
        \x20 modelforge compile shop.json -o ./shop\n\
        \x20 modelforge tree shop.json --format json\n\
        \x20 modelforge show shop.json database/schema.prisma\n\
        \x20 modelforge completions bash > /usr/share/bash-completion/completions/modelforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile a model and write the artifact tree to disk.
    #[command(
        visible_alias = "c",
        about = "Compile a model into an output directory",
        after_help = "EXAMPLES:\n\
            \x20 modelforge compile shop.json\n\
            \x20 modelforge compile shop.toml -o ./out --force\n\
            \x20 modelforge compile shop.json --dry-run"
    )]
    Compile(CompileArgs),

    /// Print the artifact tree without writing anything.
    #[command(
        about = "Print the compiled artifact tree",
        after_help = "EXAMPLES:\n\
            \x20 modelforge tree shop.json\n\
            \x20 modelforge tree shop.json --format json"
    )]
    Tree(TreeArgs),

    /// Print the content of one artifact.
    #[command(
        visible_alias = "cat",
        about = "Print one compiled artifact",
        after_help = "EXAMPLES:\n\
            \x20 modelforge show shop.json documentation/sequence-diagram.mmd\n\
            \x20 modelforge show shop.json client/app/page.tsx"
    )]
    Show(ShowArgs),

    /// Write one artifact to a file.
    #[command(
        about = "Export one compiled artifact to a file",
        after_help = "EXAMPLES:\n\
            \x20 modelforge export shop.json database/schema.prisma --to schema.prisma"
    )]
    Export(ExportArgs),

    /// Print the merged page routes.
    #[command(
        about = "Print the navigable route tree",
        after_help = "EXAMPLES:\n\
            \x20 modelforge routes shop.json"
    )]
    Routes(RoutesArgs),

    /// Initialise a ModelForge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 modelforge init           # default location\n\
            \x20 modelforge init --local   # .modelforge.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modelforge completions bash > ~/.local/share/bash-completion/completions/modelforge\n\
            \x20 modelforge completions zsh  > ~/.zfunc/_modelforge\n\
            \x20 modelforge completions fish > ~/.config/fish/completions/modelforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the ModelForge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modelforge config get defaults.database\n\
            \x20 modelforge config list\n\
            \x20 modelforge config path"
    )]
    Config(ConfigCommands),
}

/// Path to the model file, shared by every model-consuming command.
#[derive(Debug, Args)]
pub struct ModelArg {
    /// Model file (`.json` or `.toml`).
    #[arg(value_name = "MODEL", help = "Model file (.json or .toml)")]
    pub model: PathBuf,
}

// ── compile ───────────────────────────────────────────────────────────────────

/// Arguments for `modelforge compile`.
#[derive(Debug, Args)]
pub struct CompileArgs {
    #[command(flatten)]
    pub model: ModelArg,

    /// Output directory (defaults to `export.output_dir` from config).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory"
    )]
    pub output: Option<PathBuf>,

    /// Write into an existing directory.
    #[arg(long = "force", help = "Overwrite existing output")]
    pub force: bool,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── tree ──────────────────────────────────────────────────────────────────────

/// Arguments for `modelforge tree`.
#[derive(Debug, Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub model: ModelArg,

    /// Rendering of the tree (defaults to `output.tree_format` from config).
    #[arg(long = "format", value_enum, help = "Tree format")]
    pub format: Option<TreeFormat>,
}

/// How `modelforge tree` renders the artifact tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeFormat {
    /// Indented box-drawing tree.
    #[default]
    Tree,
    /// The tree as serialized JSON, including file contents.
    Json,
}

// ── show / export ─────────────────────────────────────────────────────────────

/// Arguments for `modelforge show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub model: ModelArg,

    /// `/`-separated artifact path, e.g. `database/schema.prisma`.
    #[arg(value_name = "ARTIFACT", help = "Artifact path inside the tree")]
    pub artifact: String,
}

/// Arguments for `modelforge export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub model: ModelArg,

    /// `/`-separated artifact path.
    #[arg(value_name = "ARTIFACT", help = "Artifact path inside the tree")]
    pub artifact: String,

    /// Destination file.
    #[arg(long = "to", value_name = "FILE", help = "Destination file")]
    pub to: PathBuf,

    /// Overwrite the destination file.
    #[arg(long = "force", help = "Overwrite an existing file")]
    pub force: bool,
}

// ── routes ────────────────────────────────────────────────────────────────────

/// Arguments for `modelforge routes`.
#[derive(Debug, Args)]
pub struct RoutesArgs {
    #[command(flatten)]
    pub model: ModelArg,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `modelforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.modelforge.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modelforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `modelforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_compile_command() {
        let cli = Cli::parse_from([
            "modelforge",
            "compile",
            "shop.json",
            "-o",
            "out",
            "--force",
        ]);
        let Commands::Compile(args) = cli.command else {
            panic!("expected Compile command");
        };
        assert_eq!(args.model.model, PathBuf::from("shop.json"));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(args.force);
        assert!(!args.dry_run);
    }

    #[test]
    fn tree_format_parses() {
        let cli = Cli::parse_from(["modelforge", "tree", "m.json", "--format", "json"]);
        let Commands::Tree(args) = cli.command else {
            panic!("expected Tree command");
        };
        assert_eq!(args.format, Some(TreeFormat::Json));
    }

    #[test]
    fn export_requires_destination() {
        let result = Cli::try_parse_from(["modelforge", "export", "m.json", "README.md"]);
        assert!(result.is_err());
    }

    #[test]
    fn show_alias() {
        let cli = Cli::parse_from(["modelforge", "cat", "m.json", "README.md"]);
        assert!(matches!(cli.command, Commands::Show(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["modelforge", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
