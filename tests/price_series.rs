use stock_tracker_wasm::domain::market_data::{PriceSeries, TimeLabel};

#[test]
fn decodes_parallel_columns() {
    let body = r#"{"times": ["Mon, 01 Jan 2024 00:00:00 GMT", 1718454645500], "prices": [187.5, 188.25]}"#;
    let series: PriceSeries = serde_json::from_str(body).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series.prices(), &[187.5, 188.25]);
    assert_eq!(series.times()[0].display_label(), "Mon, 01 Jan 2024 00:00:00 GMT");
    assert_eq!(series.times()[1].display_label(), "2024-06-15 12:30");
    assert_eq!(series.price_bounds(), Some((187.5, 188.25)));
}

#[test]
fn rejects_mismatched_lengths() {
    let body = r#"{"times": ["2024-01-01", "2024-01-02"], "prices": [1.0]}"#;
    let err = serde_json::from_str::<PriceSeries>(body).unwrap_err();

    assert!(err.to_string().contains("2 times but 1 prices"));
}

#[test]
fn rejects_missing_column() {
    assert!(serde_json::from_str::<PriceSeries>(r#"{"times": []}"#).is_err());
}

#[test]
fn empty_series_is_valid() {
    let series: PriceSeries = serde_json::from_str(r#"{"times": [], "prices": []}"#).unwrap();

    assert!(series.is_empty());
    assert_eq!(series.price_bounds(), None);
}

#[test]
fn unsorted_times_are_kept_in_order() {
    let series = PriceSeries::new(
        vec![TimeLabel::from("2024-01-03"), TimeLabel::from("2024-01-01")],
        vec![3.0, 1.0],
    )
    .unwrap();

    assert_eq!(series.times()[0], TimeLabel::from("2024-01-03"));
}
