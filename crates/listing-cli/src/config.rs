//! Step configuration: JSON file values merged with command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use listing_artifact::{ArtifactMetadata, ArtifactRef};
use listing_model::PriceRange;
use listing_validate::{CheckConfig, DEFAULT_MIN_ROWS};
use serde::Deserialize;
use tracing::warn;

/// Values a pipeline step may take from a config file or flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    pub input_artifact: Option<String>,
    pub output_artifact: Option<String>,
    pub output_type: Option<String>,
    pub output_description: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rows: Option<usize>,
}

/// Fully resolved parameters of the cleaning step.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanParams {
    pub input: ArtifactRef,
    pub output: ArtifactMetadata,
    pub range: PriceRange,
}

impl StepConfig {
    /// Load a step configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
    }

    /// Load `path` when given, otherwise start empty.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Overlay `overrides` on top of `self`; values present in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            input_artifact: overrides.input_artifact.or(self.input_artifact),
            output_artifact: overrides.output_artifact.or(self.output_artifact),
            output_type: overrides.output_type.or(self.output_type),
            output_description: overrides.output_description.or(self.output_description),
            min_price: overrides.min_price.or(self.min_price),
            max_price: overrides.max_price.or(self.max_price),
            min_rows: overrides.min_rows.or(self.min_rows),
        }
    }

    /// Resolve the cleaning step parameters, reporting every missing key at once.
    pub fn clean_params(&self) -> Result<CleanParams> {
        let mut missing = Vec::new();
        require(&self.input_artifact, "input_artifact", &mut missing);
        require(&self.output_artifact, "output_artifact", &mut missing);
        require(&self.output_type, "output_type", &mut missing);
        require(&self.output_description, "output_description", &mut missing);
        require(&self.min_price, "min_price", &mut missing);
        require(&self.max_price, "max_price", &mut missing);

        let (
            Some(input),
            Some(name),
            Some(artifact_type),
            Some(description),
            Some(min),
            Some(max),
        ) = (
            &self.input_artifact,
            &self.output_artifact,
            &self.output_type,
            &self.output_description,
            self.min_price,
            self.max_price,
        )
        else {
            bail!("missing required configuration: {}", missing.join(", "));
        };

        let input: ArtifactRef = input
            .parse()
            .with_context(|| format!("invalid input_artifact '{input}'"))?;
        let range = checked_range(min, max);

        Ok(CleanParams {
            input,
            output: ArtifactMetadata {
                name: name.clone(),
                artifact_type: artifact_type.clone(),
                description: description.clone(),
            },
            range,
        })
    }

    /// Resolve the validation check configuration.
    pub fn check_config(&self) -> Result<CheckConfig> {
        let mut missing = Vec::new();
        require(&self.min_price, "min_price", &mut missing);
        require(&self.max_price, "max_price", &mut missing);
        let (Some(min), Some(max)) = (self.min_price, self.max_price) else {
            bail!("missing required configuration: {}", missing.join(", "));
        };
        Ok(CheckConfig::new(checked_range(min, max))
            .with_min_rows(self.min_rows.unwrap_or(DEFAULT_MIN_ROWS)))
    }
}

fn require<T>(value: &Option<T>, key: &'static str, missing: &mut Vec<&'static str>) {
    if value.is_none() {
        missing.push(key);
    }
}

fn checked_range(min: f64, max: f64) -> PriceRange {
    let range = PriceRange::new(min, max);
    if range.is_inverted() {
        warn!(%range, "min_price is greater than max_price; every row will be dropped");
    }
    range
}
