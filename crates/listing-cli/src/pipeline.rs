//! Pipeline stages for the cleaning and checking steps.
//!
//! The cleaning step runs these stages in order:
//! 1. **Fetch**: Resolve the input artifact to a verified local file
//! 2. **Ingest**: Read the file into a Dataset
//! 3. **Clean**: Drop out-of-range prices and normalize review dates
//! 4. **Publish**: Write the cleaned Dataset to scratch space and register it
//!
//! A schema error in stage 3 aborts the run before anything is written.

use std::path::PathBuf;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use listing_artifact::{ArtifactManifest, ArtifactRef, ArtifactStore};
use listing_ingest::{read_csv_table, write_csv_table};
use listing_transform::{CleanSummary, clean_dataset};
use listing_validate::{CheckConfig, CheckKind, RunOptions, ValidationReport, run_checks};

use crate::config::CleanParams;

/// Outcome of a successful cleaning run.
#[derive(Debug)]
pub struct CleanRun {
    pub summary: CleanSummary,
    pub published: ArtifactManifest,
}

/// Where a check run loads its Dataset from.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    Artifact(ArtifactRef),
    File(PathBuf),
}

/// Fetch an artifact and read it into a Dataset.
pub fn load_artifact<S: ArtifactStore>(store: &S, reference: &ArtifactRef) -> Result<DataFrame> {
    let path = store
        .fetch(reference)
        .with_context(|| format!("fetch artifact {reference}"))?;
    read_csv_table(&path).with_context(|| format!("read {}", path.display()))
}

/// Load a Dataset from either the store or a local file.
pub fn load_source<S: ArtifactStore>(store: &S, source: &DatasetSource) -> Result<DataFrame> {
    match source {
        DatasetSource::Artifact(reference) => load_artifact(store, reference),
        DatasetSource::File(path) => {
            read_csv_table(path).with_context(|| format!("read {}", path.display()))
        }
    }
}

/// Run the cleaning step end to end.
pub fn run_clean<S: ArtifactStore>(store: &S, params: &CleanParams) -> Result<CleanRun> {
    let span = info_span!("clean", input = %params.input, output = %params.output.name);
    let _guard = span.enter();

    let df = load_artifact(store, &params.input)?;
    info!(rows = df.height(), columns = df.width(), "loaded input");

    let cleaned = clean_dataset(&df, params.range).context("clean dataset")?;

    let scratch = tempfile::tempdir().context("create scratch directory")?;
    let output_path = scratch.path().join(&params.output.name);
    write_csv_table(&cleaned.frame, &output_path)
        .with_context(|| format!("write {}", output_path.display()))?;

    let published = store
        .publish(&output_path, &params.output)
        .with_context(|| format!("publish {}", params.output.name))?;
    info!(
        artifact = %published.reference(),
        rows = cleaned.summary.output_rows,
        "published cleaned dataset"
    );

    Ok(CleanRun {
        summary: cleaned.summary,
        published,
    })
}

/// Load a Dataset and run the selected checks against it.
pub fn run_check<S: ArtifactStore>(
    store: &S,
    source: &DatasetSource,
    config: &CheckConfig,
    selection: &[CheckKind],
    options: RunOptions,
) -> Result<ValidationReport> {
    let span = info_span!("check");
    let _guard = span.enter();

    let df = load_source(store, source)?;
    info!(rows = df.height(), "loaded dataset");
    Ok(run_checks(&df, config, selection, options))
}
