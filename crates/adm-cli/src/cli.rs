//! CLI argument definitions for the admissions pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "admissions-etl",
    version,
    about = "Convert a hospital admissions CSV into a typed Parquet dataset",
    long_about = "Extract an admissions CSV, enforce the admissions schema, derive \
                  length-of-stay fields, run data-quality checks, and write a \
                  snappy-compressed Parquet file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Run extract, transform, validate, and load.
    Run(RunArgs),

    /// Print the admissions schema.
    Schema,

    /// Show row count and column types of a Parquet output file.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Source CSV file.
    #[arg(long = "source", value_name = "CSV", default_value = "admissions.csv")]
    pub source: PathBuf,

    /// Destination Parquet file. Missing parent directories are created.
    #[arg(
        long = "output",
        value_name = "PARQUET",
        default_value = "admissions.parquet"
    )]
    pub output: PathBuf,

    /// Transform and validate without writing the Parquet file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "JSON")]
    pub report: Option<PathBuf>,

    /// Exit with status 1 when validation reports warnings.
    ///
    /// Output is still written.
    #[arg(long = "fail-on-warnings")]
    pub fail_on_warnings: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Parquet file to inspect.
    #[arg(value_name = "PARQUET")]
    pub path: PathBuf,
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
