//! Listings cleaning CLI.

use clap::{ColorChoice, Parser};
use listing_artifact::{ArtifactMetadata, LocalArtifactStore};
use listing_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{ArtifactsCommand, Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_check_command, run_clean_command, run_list_artifacts, run_publish_artifact,
};
use crate::summary::{print_artifact_versions, print_check_report, print_clean_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let store = LocalArtifactStore::new(&cli.store);
    let config = cli.config.as_deref();
    let exit_code = match &cli.command {
        Command::Clean(args) => match run_clean_command(&store, config, args) {
            Ok(run) => {
                print_clean_summary(&run);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Check(args) => match run_check_command(&store, config, args) {
            Ok(report) => {
                print_check_report(&report);
                if report.passed() { 0 } else { 1 }
            }
            Err(error) => report_error(&error),
        },
        Command::Artifacts(ArtifactsCommand::List { name }) => {
            match run_list_artifacts(&store, name) {
                Ok(manifests) => {
                    print_artifact_versions(name, &manifests);
                    0
                }
                Err(error) => report_error(&error),
            }
        }
        Command::Artifacts(ArtifactsCommand::Publish {
            file,
            name,
            artifact_type,
            description,
        }) => {
            let metadata = ArtifactMetadata {
                name: name.clone(),
                artifact_type: artifact_type.clone(),
                description: description.clone(),
            };
            match run_publish_artifact(&store, file, &metadata) {
                Ok(manifest) => {
                    println!("Published: {}", manifest.reference());
                    0
                }
                Err(error) => report_error(&error),
            }
        }
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
