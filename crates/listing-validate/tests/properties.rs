//! The price check never fires against the transform's output.

use listing_model::PriceRange;
use listing_transform::clean;
use listing_validate::check_price_range;
use polars::prelude::{Column, DataFrame};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cleaned_output_passes_price_check(
        prices in prop::collection::vec(prop::option::of(-1000.0f64..5000.0), 0..60),
        lo in -100.0f64..1000.0,
        width in 0.0f64..2000.0,
    ) {
        let df = DataFrame::new(vec![Column::new("price".into(), prices)]).unwrap();
        let range = PriceRange::new(lo, lo + width);

        let cleaned = clean(&df, range.min, range.max).unwrap();

        prop_assert!(check_price_range(&cleaned, range).is_ok());
    }
}
