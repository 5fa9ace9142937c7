//! CLI argument definitions for the upload checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "maa",
    version,
    about = "Market Analysis Automation - upload normalization and preview",
    long_about = "Normalize tabular uploads (CSV, TSV, XLSX, XLS) onto the \
                  market-analysis field schema.\n\n\
                  `check` previews how a file would map without committing to \
                  anything; `normalize` runs the full pipeline and emits the \
                  normalized dataset as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview how an upload would map, without normalizing it.
    Check(CheckArgs),

    /// Run the full pipeline and emit the normalized dataset as CSV.
    Normalize(NormalizeArgs),

    /// List the configured canonical fields and their aliases.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Upload file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON pipeline config (default: built-in market schema).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Upload file to normalize.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON pipeline config (default: built-in market schema).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the normalized CSV here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// JSON pipeline config (default: built-in market schema).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI report format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
