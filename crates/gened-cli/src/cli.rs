//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gened",
    version,
    about = "Annotate exported class listings with general-education content areas",
    long_about = "Reads a class listing exported from the student administration\n\
                  system, looks each class up in the bundled undergraduate-catalog\n\
                  content-area table, and prints a filtered, column-aligned report.\n\n\
                  The bundled table is a quick-check aid; confirm availability against\n\
                  the live catalog."
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
    /// Annotate a class listing and print the filtered report.
    Check(CheckArgs),

    /// List the content-area groups in the bundled catalog table.
    Areas,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the exported HTML class listing (the `.xls` download).
    #[arg(long = "classes", value_name = "PATH")]
    pub classes: PathBuf,

    /// Content-area selector: 0 shows every class, 1-4 only classes in
    /// that content area, 5 only classes with any content area.
    #[arg(
        long = "show",
        value_name = "SELECTOR",
        default_value_t = 0,
        value_parser = clap::value_parser!(i64).range(0..=5)
    )]
    pub show: i64,

    /// Fullness selector: 0 shows every class, 1 only exactly-full
    /// classes, 2 only classes with open seats.
    #[arg(
        long = "full",
        value_name = "SELECTOR",
        default_value_t = 0,
        value_parser = clap::value_parser!(i64).range(0..=2)
    )]
    pub full: i64,
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
