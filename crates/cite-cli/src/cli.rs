//! CLI argument definitions for the citation table annotator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cite_model::TableType;

#[derive(Parser)]
#[command(
    name = "cite-annotate",
    version,
    about = "Annotate citation and metadata tables with validation issues",
    long_about = "Read a citation or metadata CSV table together with the JSON report\n\
                  produced by a validator, resolve every report entry to the table\n\
                  items it addresses, and emit annotated rows plus a colored error\n\
                  catalog as JSON."
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

    /// Include cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Annotate a table with a validation report.
    Annotate(AnnotateArgs),

    /// List the fields of a table type.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct AnnotateArgs {
    /// CSV table that was validated.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// JSON validation report for the table.
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Write the annotated table here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Table type; detected from the header row when omitted.
    #[arg(long = "table-type", value_enum)]
    pub table_type: Option<TableTypeArg>,

    /// Seed for color allocation, for reproducible output.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Skip the summary tables.
    #[arg(long = "quiet-summary")]
    pub quiet_summary: bool,
}

#[derive(Parser)]
pub struct FieldsArgs {
    #[arg(value_enum, default_value = "meta")]
    pub table_type: TableTypeArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TableTypeArg {
    Meta,
    Cits,
}

impl From<TableTypeArg> for TableType {
    fn from(value: TableTypeArg) -> Self {
        match value {
            TableTypeArg::Meta => TableType::Meta,
            TableTypeArg::Cits => TableType::Cits,
        }
    }
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
