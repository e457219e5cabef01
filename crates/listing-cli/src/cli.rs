//! CLI argument definitions for the listings cleaning step.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use listing_validate::CheckKind;

#[derive(Parser)]
#[command(
    name = "listing-clean",
    version,
    about = "Clean rental listings data and validate the result",
    long_about = "Clean rental listings data and validate the result.\n\n\
                  Drops listings priced outside an inclusive range, normalizes\n\
                  review dates, and publishes the result as a versioned artifact."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Artifact store directory.
    #[arg(long = "store", value_name = "DIR", default_value = "artifacts", global = true)]
    pub store: PathBuf,

    /// JSON step configuration; command-line flags override its values.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

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
    /// Drop out-of-range prices, normalize review dates, and publish the result.
    Clean(CleanArgs),

    /// Run validation checks against a dataset.
    Check(CheckArgs),

    /// Inspect or seed the artifact store.
    #[command(subcommand)]
    Artifacts(ArtifactsCommand),
}

#[derive(Args)]
pub struct CleanArgs {
    /// Input artifact reference (name[:latest|vN]).
    #[arg(long = "input-artifact", value_name = "REF")]
    pub input_artifact: Option<String>,

    /// Name to publish the cleaned dataset under.
    #[arg(long = "output-artifact", value_name = "NAME")]
    pub output_artifact: Option<String>,

    /// Type label of the published artifact.
    #[arg(long = "output-type", value_name = "TYPE")]
    pub output_type: Option<String>,

    /// Description of the published artifact.
    #[arg(long = "output-description", value_name = "TEXT")]
    pub output_description: Option<String>,

    #[command(flatten)]
    pub price: PriceArgs,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Artifact to check (name[:latest|vN]).
    #[arg(long = "artifact", value_name = "REF", conflicts_with = "csv")]
    pub artifact: Option<String>,

    /// Local CSV file to check.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    #[command(flatten)]
    pub price: PriceArgs,

    /// Minimum number of rows the dataset must have.
    #[arg(long = "min-rows", value_name = "N")]
    pub min_rows: Option<usize>,

    /// Check to run; repeat to select several (default: all).
    #[arg(long = "check", value_name = "KIND", value_parser = parse_check_kind)]
    pub checks: Vec<CheckKind>,

    /// Stop at the first failing check.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,
}

#[derive(Args)]
pub struct PriceArgs {
    /// Inclusive lower price bound.
    #[arg(long = "min-price", value_name = "N", allow_negative_numbers = true)]
    pub min_price: Option<f64>,

    /// Inclusive upper price bound.
    #[arg(long = "max-price", value_name = "N", allow_negative_numbers = true)]
    pub max_price: Option<f64>,
}

#[derive(Subcommand)]
pub enum ArtifactsCommand {
    /// List published versions of an artifact.
    List {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Publish a local file as the next version of an artifact.
    Publish {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(long = "name", value_name = "NAME")]
        name: String,

        #[arg(long = "type", value_name = "TYPE")]
        artifact_type: String,

        #[arg(long = "description", value_name = "TEXT", default_value = "")]
        description: String,
    },
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

fn parse_check_kind(value: &str) -> Result<CheckKind, String> {
    CheckKind::parse(value).ok_or_else(|| {
        let known: Vec<&str> = CheckKind::ALL.iter().map(CheckKind::label).collect();
        format!("unknown check '{value}' (expected one of: {})", known.join(", "))
    })
}
