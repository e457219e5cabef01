//! Step configuration loading from JSON files.

use std::fs;

use listing_cli::config::StepConfig;
use tempfile::TempDir;

#[test]
fn file_values_are_overridden_by_flags() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("step.json");
    fs::write(
        &path,
        r#"{
            "input_artifact": "sample.csv:latest",
            "output_artifact": "clean_sample.csv",
            "output_type": "clean_sample",
            "output_description": "Data with outliers removed",
            "min_price": 10,
            "max_price": 350
        }"#,
    )
    .unwrap();

    let file = StepConfig::load(&path).unwrap();
    let merged = file.merge(StepConfig {
        min_price: Some(25.0),
        ..StepConfig::default()
    });
    let params = merged.clean_params().unwrap();
    assert_eq!(params.range.min, 25.0);
    assert_eq!(params.range.max, 350.0);
    assert_eq!(params.input.to_string(), "sample.csv:latest");
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let error = StepConfig::load(&dir.path().join("absent.json")).unwrap_err();
    insta::assert_snapshot!(
        error.to_string().replace(&dir.path().display().to_string(), "<dir>"),
        @"read config <dir>/absent.json"
    );
}

#[test]
fn no_config_file_starts_empty() {
    let config = StepConfig::load_optional(None).unwrap();
    assert_eq!(config, StepConfig::default());
    let error = config.check_config().unwrap_err();
    assert_eq!(
        error.to_string(),
        "missing required configuration: min_price, max_price"
    );
}
