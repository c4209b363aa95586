//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dha-synth",
    version,
    about = "DHA synthetic dataset studio - generate linked tables with seeded data-quality defects",
    long_about = "Generate a synthetic South African population registry and DHA applications\n\
                  log with controlled, categorized data-quality defects for data-quality\n\
                  training exercises. A fixed seed reproduces a run byte for byte."
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
    /// Generate both datasets and write them to the output directory.
    Generate(GenerateArgs),

    /// List the province -> DHA branch directory.
    Branches,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Population registry row count.
    #[arg(long = "population-rows", value_name = "N", default_value_t = 10_000)]
    pub population_rows: usize,

    /// Applications row count.
    #[arg(long = "application-rows", value_name = "N", default_value_t = 5_000)]
    pub application_rows: usize,

    /// Fraction of registry rows given a duplicated identifier.
    #[arg(long = "duplicate-rate", value_name = "RATE", default_value_t = 0.02)]
    pub duplicate_rate: f64,

    /// Fraction of registry rows with one nulled field.
    #[arg(long = "missing-rate", value_name = "RATE", default_value_t = 0.03)]
    pub missing_rate: f64,

    /// Fraction of rows with an invalid value.
    #[arg(long = "invalid-rate", value_name = "RATE", default_value_t = 0.01)]
    pub invalid_rate: f64,

    /// Seed for the run's random source.
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "data")]
    pub output_dir: PathBuf,

    /// Prefix output filenames with "big_data_".
    #[arg(long = "big-data")]
    pub big_data: bool,

    /// Generate and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the summary-statistics JSON file.
    #[arg(long = "no-stats-json")]
    pub no_stats_json: bool,

    /// Disable the row progress bars.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
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
