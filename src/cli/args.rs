/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use usagefmt::UsageStyle;

/// usagefmt — preview and check usage help text for parameter models.
#[derive(Debug, Parser)]
#[command(
    name = "usagefmt",
    about = "Render aligned usage help text from a parameter model",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format for check results. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants for `check` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Aligned table with headers (human-readable).
    Table,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the usage text for a parameter model.
    Render(RenderArgs),
    /// Validate a parameter model and summarize its contents.
    Check(CheckArgs),
}

/// Arguments for `usagefmt render`.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Path to the usage model JSON file.
    pub model: PathBuf,

    /// Options-block layout style.
    #[arg(long, value_name = "STYLE", default_value = "unix")]
    pub style: StyleArg,

    /// Column budget for wrapping.
    #[arg(long, value_name = "N", default_value = "79")]
    pub columns: usize,

    /// Literal indentation prefixed to every emitted line.
    #[arg(long, value_name = "STR", default_value = "")]
    pub indent: String,
}

/// Arguments for `usagefmt check`.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Path to the usage model JSON file.
    pub model: PathBuf,
}

/// Layout style choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum StyleArg {
    /// Aligned columns: descriptions share one offset.
    #[default]
    Unix,
    /// Names line with details stacked underneath.
    Stacked,
}

impl From<StyleArg> for UsageStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Unix => Self::Unix,
            StyleArg::Stacked => Self::Stacked,
        }
    }
}
