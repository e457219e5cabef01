use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use listing_artifact::{ArtifactManifest, ArtifactMetadata, ArtifactStore, LocalArtifactStore};
use listing_cli::config::StepConfig;
use listing_cli::pipeline::{CleanRun, DatasetSource, run_check, run_clean};
use listing_validate::{RunOptions, ValidationReport};

use crate::cli::{CheckArgs, CleanArgs};

pub fn run_clean_command(
    store: &LocalArtifactStore,
    config: Option<&Path>,
    args: &CleanArgs,
) -> Result<CleanRun> {
    let overrides = StepConfig {
        input_artifact: args.input_artifact.clone(),
        output_artifact: args.output_artifact.clone(),
        output_type: args.output_type.clone(),
        output_description: args.output_description.clone(),
        min_price: args.price.min_price,
        max_price: args.price.max_price,
        min_rows: None,
    };
    let params = StepConfig::load_optional(config)?
        .merge(overrides)
        .clean_params()?;
    run_clean(store, &params)
}

pub fn run_check_command(
    store: &LocalArtifactStore,
    config: Option<&Path>,
    args: &CheckArgs,
) -> Result<ValidationReport> {
    let overrides = StepConfig {
        min_price: args.price.min_price,
        max_price: args.price.max_price,
        min_rows: args.min_rows,
        ..StepConfig::default()
    };
    let check_config = StepConfig::load_optional(config)?
        .merge(overrides)
        .check_config()?;
    let source = match (&args.artifact, &args.csv) {
        (Some(reference), None) => DatasetSource::Artifact(
            reference
                .parse()
                .with_context(|| format!("invalid artifact reference '{reference}'"))?,
        ),
        (None, Some(path)) => DatasetSource::File(path.clone()),
        _ => bail!("exactly one of --artifact or --csv is required"),
    };
    let options = RunOptions {
        fail_fast: args.fail_fast,
    };
    run_check(store, &source, &check_config, &args.checks, options)
}

pub fn run_list_artifacts(store: &LocalArtifactStore, name: &str) -> Result<Vec<ArtifactManifest>> {
    store
        .list(name)
        .with_context(|| format!("list versions of {name}"))
}

pub fn run_publish_artifact(
    store: &LocalArtifactStore,
    file: &Path,
    metadata: &ArtifactMetadata,
) -> Result<ArtifactManifest> {
    let manifest = store
        .publish(file, metadata)
        .with_context(|| format!("publish {}", file.display()))?;
    info!(artifact = %manifest.reference(), "published");
    Ok(manifest)
}
