//! CLI argument definitions for the indicators pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "muni",
    version,
    about = "Municipal indicators pipeline - normalize and aggregate activity batches",
    long_about = "Normalize spreadsheet activity batches and aggregate indicator statistics.\n\n\
                  Free-text dates become canonical YYYY-MM-DD, numeric fields are cleaned,\n\
                  and batches are validated against the configured required columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Process a batch CSV and print aggregated indicator summaries.
    Report(ReportArgs),

    /// Validate a batch CSV against the required columns.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the batch CSV exported from the spreadsheet.
    #[arg(value_name = "BATCH_CSV")]
    pub batch: PathBuf,

    /// JSON file overriding the canonical column names.
    #[arg(long = "columns", value_name = "FILE")]
    pub columns: Option<PathBuf>,

    /// Group records by this column instead of the entity column.
    #[arg(long = "group-by", value_name = "COLUMN")]
    pub group_by: Option<String>,

    /// Accumulate this numeric column per group (default: the population
    /// column).
    #[arg(long = "value-field", value_name = "COLUMN")]
    pub value_field: Option<String>,

    /// Keep only records on or after this date. Applied together with
    /// --end; an unparseable bound disables the filter.
    #[arg(long = "start", value_name = "DATE")]
    pub start: Option<String>,

    /// Keep only records on or before this date.
    #[arg(long = "end", value_name = "DATE")]
    pub end: Option<String>,

    /// Print the full report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the batch CSV exported from the spreadsheet.
    #[arg(value_name = "BATCH_CSV")]
    pub batch: PathBuf,

    /// JSON file overriding the canonical column names.
    #[arg(long = "columns", value_name = "FILE")]
    pub columns: Option<PathBuf>,
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
