//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pyskel",
    bin_name = "pyskel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate Python projects with lint, test and build tooling",
    long_about = "pyskel generates a Python package skeleton (setup.py, \
                  pyproject.toml, Makefile, tests) after validating the \
                  package name and line length, then locks dependencies \
                  with poetry.",
    after_help = "EXAMPLES:\n\
        \x20 pyskel generate --package-name pymx --line-length 88\n\
        \x20 pyskel generate ./out --answers answers.toml --no-input\n\
        \x20 pyskel validate --package-name Foo-Bar\n\
        \x20 pyskel finalize ./out/pymx",
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
    /// Validate values, render the project and lock its dependencies.
    #[command(
        visible_alias = "g",
        about = "Generate a new Python project",
        after_help = "EXAMPLES:\n\
            \x20 pyskel generate\n\
            \x20 pyskel generate ./out --package-name my_tool --use-mypy\n\
            \x20 pyskel generate --set line_length=100 --no-finalize\n\
            \x20 pyskel generate --dry-run --output-format json"
    )]
    Generate(GenerateArgs),

    /// Run the pre-generation checks only.
    #[command(
        about = "Validate generation values without writing anything",
        after_help = "EXAMPLES:\n\
            \x20 pyskel validate --package-name pymx --line-length 79\n\
            \x20 pyskel validate --package-name _tool --name-only"
    )]
    Validate(ValidateArgs),

    /// Run the post-generation lock step on an existing project.
    #[command(
        about = "Lock dependencies of a generated project",
        after_help = "EXAMPLES:\n\
            \x20 pyskel finalize ./pymx\n\
            \x20 pyskel finalize ./pymx --strict-lock"
    )]
    Finalize(FinalizeArgs),

    /// Initialise a pyskel configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pyskel init\n\
            \x20 pyskel init --force\n\
            \x20 pyskel --config ./pyskel.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pyskel completions bash > ~/.local/share/bash-completion/completions/pyskel\n\
            \x20 pyskel completions zsh  > ~/.zfunc/_pyskel\n\
            \x20 pyskel completions fish > ~/.config/fish/completions/pyskel.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the pyskel configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pyskel config get defaults.line_length\n\
            \x20 pyskel config list\n\
            \x20 pyskel config path"
    )]
    Config(ConfigCommands),
}

// ── shared value flags ────────────────────────────────────────────────────────

/// Generation values accepted by `generate` and `validate`.
///
/// Precedence, lowest first: configured defaults, `--answers`, `--set`,
/// then the dedicated flags.
#[derive(Debug, Clone, Default, Args)]
pub struct ValueArgs {
    /// Name of the primary Python package.
    #[arg(long = "package-name", value_name = "NAME")]
    pub package_name: Option<String>,

    /// Maximum line length for flake8 and black (at least 79).
    #[arg(long = "line-length", value_name = "N")]
    pub line_length: Option<String>,

    /// One-line project description.
    #[arg(long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// Author name for package metadata.
    #[arg(long = "author-name", value_name = "NAME")]
    pub author_name: Option<String>,

    /// Author e-mail for package metadata.
    #[arg(long = "author-email", value_name = "EMAIL")]
    pub author_email: Option<String>,

    /// Add pylint to the lint target.
    #[arg(long = "use-pylint")]
    pub use_pylint: bool,

    /// Add mypy to the lint target.
    #[arg(long = "use-mypy")]
    pub use_mypy: bool,

    /// Set any generation value (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub set: Vec<(String, String)>,

    /// TOML file with pre-filled values.
    #[arg(long = "answers", value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Never prompt; use defaults for anything not supplied.
    #[arg(long = "no-input")]
    pub no_input: bool,
}

/// Parse a `KEY=VALUE` pair. The value may be empty or contain `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `pyskel generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory the project folder is created in.
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub values: ValueArgs,

    /// Skip the dependency lock step.
    #[arg(long = "no-finalize", conflicts_with = "strict_lock")]
    pub no_finalize: bool,

    /// Fail the run if the dependency lock step fails.
    #[arg(long = "strict-lock")]
    pub strict_lock: bool,

    /// Show what would be created without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `pyskel validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub values: ValueArgs,

    /// Check the package name only.
    #[arg(long = "name-only")]
    pub name_only: bool,
}

// ── finalize ──────────────────────────────────────────────────────────────────

/// Arguments for `pyskel finalize`.
#[derive(Debug, Args)]
pub struct FinalizeArgs {
    /// Root of a generated project.
    #[arg(value_name = "DIR")]
    pub project_dir: PathBuf,

    /// Exit non-zero if locking fails.
    #[arg(long = "strict-lock")]
    pub strict_lock: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pyskel init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pyskel completions`.
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

/// Subcommands for `pyskel config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.line_length`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
