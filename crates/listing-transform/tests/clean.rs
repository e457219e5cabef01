//! Tests for the cleaning transform.

use listing_model::{PriceRange, SchemaError};
use listing_transform::{TransformError, clean, clean_dataset};
use polars::df;
use polars::prelude::{DataFrame, DataType};

fn prices(df: &DataFrame) -> Vec<Option<f64>> {
    df.column("price")
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

fn review_text(df: &DataFrame) -> Vec<Option<String>> {
    df.column("last_review")
        .unwrap()
        .cast(&DataType::String)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

#[test]
fn test_filters_to_inclusive_range() {
    let df = df! {
        "id" => &[1i64, 2, 3, 4],
        "price" => &[5i64, 50, 500, 999_999],
    }
    .unwrap();

    let cleaned = clean(&df, 10.0, 1000.0).unwrap();

    assert_eq!(cleaned.height(), 2);
    assert_eq!(prices(&cleaned), vec![Some(50.0), Some(500.0)]);
    // Input is untouched.
    assert_eq!(df.height(), 4);
}

#[test]
fn test_boundaries_are_kept() {
    let df = df! { "price" => &[9.99f64, 10.0, 1000.0, 1000.01] }.unwrap();

    let cleaned = clean(&df, 10.0, 1000.0).unwrap();

    assert_eq!(prices(&cleaned), vec![Some(10.0), Some(1000.0)]);
}

#[test]
fn test_missing_price_is_schema_error() {
    let df = df! { "name" => &["Loft"], "last_review" => &["2019-05-21"] }.unwrap();

    let err = clean(&df, 10.0, 1000.0).unwrap_err();

    assert!(matches!(
        err,
        TransformError::Schema(SchemaError::MissingColumn { ref column, .. }) if column == "price"
    ));
}

#[test]
fn test_null_and_text_prices_are_dropped() {
    let df = df! {
        "id" => &[1i64, 2, 3],
        "price" => &[Some("120"), None, Some("call us")],
    }
    .unwrap();

    let cleaned = clean(&df, 10.0, 1000.0).unwrap();

    assert_eq!(cleaned.height(), 1);
    // The price column keeps its original type.
    assert_eq!(cleaned.column("price").unwrap().dtype(), &DataType::String);
}

#[test]
fn test_review_dates_degrade_to_missing() {
    let df = df! {
        "price" => &[20i64, 30, 40],
        "last_review" => &["2019-05-21", "", "garbage"],
    }
    .unwrap();

    let cleaned = clean_dataset(&df, PriceRange::new(10.0, 1000.0)).unwrap();

    assert_eq!(cleaned.frame.height(), 3);
    assert_eq!(
        cleaned.frame.column("last_review").unwrap().dtype(),
        &DataType::Date
    );
    assert_eq!(
        review_text(&cleaned.frame),
        vec![Some("2019-05-21".to_string()), None, None]
    );
    assert_eq!(cleaned.summary.unparsed_dates, Some(1));
}

#[test]
fn test_not_a_date_row_is_kept() {
    let df = df! {
        "price" => &[100i64],
        "last_review" => &["not-a-date"],
    }
    .unwrap();

    let cleaned = clean(&df, 10.0, 1000.0).unwrap();

    assert_eq!(cleaned.height(), 1);
    assert_eq!(review_text(&cleaned), vec![None]);
}

#[test]
fn test_columns_and_order_unchanged() {
    let df = df! {
        "id" => &[1i64, 2, 3],
        "name" => &["a", "b", "c"],
        "last_review" => &["2019-01-01", "2019-01-02", "2019-01-03"],
        "price" => &[50i64, 5, 70],
        "reviews_per_month" => &[0.5f64, 1.0, 2.5],
    }
    .unwrap();

    let cleaned = clean(&df, 10.0, 100.0).unwrap();

    assert_eq!(cleaned.get_column_names(), df.get_column_names());
    let ids: Vec<Option<i64>> = cleaned.column("id").unwrap().i64().unwrap().into_iter().collect();
    assert_eq!(ids, vec![Some(1), Some(3)]);
    let names: Vec<Option<&str>> = cleaned
        .column("name")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(names, vec![Some("a"), Some("c")]);
}

#[test]
fn test_inverted_bounds_give_empty_result() {
    let df = df! { "price" => &[50i64, 500] }.unwrap();

    let cleaned = clean_dataset(&df, PriceRange::new(1000.0, 10.0)).unwrap();

    assert_eq!(cleaned.frame.height(), 0);
    assert_eq!(cleaned.frame.width(), 1);
    assert_eq!(cleaned.summary.dropped_rows(), 2);
    assert_eq!(cleaned.summary.unparsed_dates, None);
}

#[test]
fn test_cleaning_twice_is_identical() {
    let df = df! {
        "price" => &[5i64, 50, 500, 999_999],
        "last_review" => &[Some("2019-05-21"), None, Some("bad"), Some("2020-01-01 10:00")],
    }
    .unwrap();

    let once = clean(&df, 10.0, 1000.0).unwrap();
    let twice = clean(&once, 10.0, 1000.0).unwrap();

    assert!(once.equals_missing(&twice));
}
