//! Property tests for the cleaning transform.

use listing_model::PriceRange;
use listing_transform::clean;
use polars::prelude::{Column, DataFrame, DataType};
use proptest::prelude::*;

fn build_frame(rows: &[(Option<f64>, Option<String>)]) -> DataFrame {
    let ids: Vec<i64> = (0..rows.len() as i64).collect();
    let prices: Vec<Option<f64>> = rows.iter().map(|(price, _)| *price).collect();
    let reviews: Vec<Option<&str>> = rows.iter().map(|(_, review)| review.as_deref()).collect();
    DataFrame::new(vec![
        Column::new("id".into(), ids),
        Column::new("price".into(), prices),
        Column::new("last_review".into(), reviews),
    ])
    .unwrap()
}

fn ids(df: &DataFrame) -> Vec<i64> {
    df.column("id")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}

fn review_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("garbage".to_string())),
        (2000i32..2025, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| Some(format!("{y:04}-{m:02}-{d:02}"))),
    ]
}

fn rows_strategy() -> impl Strategy<Value = Vec<(Option<f64>, Option<String>)>> {
    prop::collection::vec(
        (prop::option::of(-100.0f64..2000.0), review_strategy()),
        0..40,
    )
}

proptest! {
    #[test]
    fn output_prices_are_within_bounds(rows in rows_strategy(), lo in 0.0f64..500.0, width in 0.0f64..1000.0) {
        let df = build_frame(&rows);
        let range = PriceRange::new(lo, lo + width);

        let cleaned = clean(&df, range.min, range.max).unwrap();

        prop_assert_eq!(range.count_outside(&cleaned).unwrap(), 0);
        let prices = cleaned.column("price").unwrap().f64().unwrap();
        for price in prices.into_iter() {
            let price = price.unwrap();
            prop_assert!(price >= range.min && price <= range.max);
        }
    }

    #[test]
    fn row_count_never_grows(rows in rows_strategy(), lo in -200.0f64..2500.0, hi in -200.0f64..2500.0) {
        let df = build_frame(&rows);

        let cleaned = clean(&df, lo, hi).unwrap();

        prop_assert!(cleaned.height() <= df.height());
        prop_assert_eq!(cleaned.get_column_names(), df.get_column_names());
    }

    #[test]
    fn kept_rows_preserve_relative_order(rows in rows_strategy(), lo in 0.0f64..500.0, width in 0.0f64..1000.0) {
        let df = build_frame(&rows);

        let cleaned = clean(&df, lo, lo + width).unwrap();

        let kept = ids(&cleaned);
        prop_assert!(kept.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn cleaning_is_idempotent(rows in rows_strategy(), lo in 0.0f64..500.0, width in 0.0f64..1000.0) {
        let df = build_frame(&rows);

        let once = clean(&df, lo, lo + width).unwrap();
        let twice = clean(&once, lo, lo + width).unwrap();

        prop_assert!(once.equals_missing(&twice));
        prop_assert_eq!(twice.column("last_review").unwrap().dtype(), &DataType::Date);
    }
}
