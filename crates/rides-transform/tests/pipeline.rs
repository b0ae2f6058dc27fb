//! End-to-end tests for the cleaning pipeline over raw string frames.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use rides_model::BookingStatus;
use rides_transform::{has_column, run_cleaning, value_f64, value_str};

fn opt_col(name: &str, values: Vec<Option<&str>>) -> Column {
    Series::new(
        name.into(),
        values
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect::<Vec<_>>(),
    )
    .into_column()
}

/// A raw frame the way the CSV ingest materializes it: spaced headers,
/// string cells, empty cells as nulls.
fn raw_frame() -> DataFrame {
    let cols = vec![
        opt_col(
            "Booking ID",
            vec![
                Some("B1"),
                Some("B1"), // duplicate of B1, later occurrence
                Some("B2"), // negative booking value
                Some("B3"), // driver rating out of range
                Some("B4"), // completed but missing ride distance
                Some("B5"), // valid customer cancellation
                Some("B6"), // valid driver not found
                Some("B7"), // unknown status, passes through
            ],
        ),
        opt_col(
            "Booking Status",
            vec![
                Some("Completed"),
                Some("Completed"),
                Some("Completed"),
                Some("Completed"),
                Some("Completed"),
                Some("Cancelled by Customer"),
                Some("Driver Not Found"),
                Some("On Hold"),
            ],
        ),
        opt_col(
            "Booking Value",
            vec![
                Some("100"),
                Some("120"),
                Some("-50"),
                Some("90"),
                Some("80"),
                None,
                None,
                None,
            ],
        ),
        opt_col(
            "Ride Distance",
            vec![
                Some("10.5"),
                Some("11"),
                Some("5"),
                Some("8"),
                None,
                None,
                None,
                None,
            ],
        ),
        opt_col(
            "Driver Ratings",
            vec![
                Some("4.5"),
                Some("4.0"),
                Some("4.0"),
                Some("6.0"),
                None,
                None,
                None,
                None,
            ],
        ),
        opt_col(
            "Customer Rating",
            vec![
                Some("4.0"),
                Some("4.0"),
                Some("4.0"),
                Some("4.0"),
                None,
                None,
                None,
                None,
            ],
        ),
        opt_col(
            "Reason for cancelling by Customer",
            vec![
                None,
                None,
                None,
                None,
                None,
                Some("Change of plans"),
                None,
                None,
            ],
        ),
        opt_col("Driver Cancellation Reason", vec![None; 8]),
        opt_col("Incomplete Rides Reason", vec![None; 8]),
        opt_col(
            "Date",
            vec![
                Some("2024-03-01"),
                Some("2024-03-01"),
                Some("2024-03-02"),
                Some("2024-03-02"),
                Some("2024-03-03"),
                Some("2024-03-03"),
                None,
                None,
            ],
        ),
        opt_col(
            "Time",
            vec![
                Some("09:15:00"),
                Some("10:00:00"),
                Some("11:30:00"),
                Some("12:00:00"),
                Some("13:45:00"),
                Some("14:00:00"),
                None,
                None,
            ],
        ),
    ];
    DataFrame::new(cols).unwrap()
}

#[test]
fn pipeline_removes_bad_records_with_correct_attribution() {
    let (df, report) = run_cleaning(raw_frame()).unwrap();

    assert_eq!(report.rows_in, 8);
    assert_eq!(report.rows_out, 4);
    assert_eq!(report.dedupe.duplicate_groups, 1);
    assert_eq!(report.dedupe.rows_removed, 1);
    assert_eq!(report.hard_bounds.negative_values, 1);
    assert_eq!(report.hard_bounds.rating_range, 1);
    assert_eq!(report.validation.removed_for(BookingStatus::Completed), 1);
    assert_eq!(report.validation.total(), 1);
    assert_eq!(report.distribution.total(), 0);

    let ids: Vec<String> = (0..df.height())
        .map(|idx| value_str(&df, "booking_id", idx).unwrap())
        .collect();
    assert_eq!(ids, vec!["B1", "B5", "B6", "B7"]);
}

#[test]
fn pipeline_keeps_first_duplicate_occurrence() {
    let (df, _) = run_cleaning(raw_frame()).unwrap();
    assert_eq!(value_f64(&df, "booking_value", 0), Some(100.0));
}

#[test]
fn pipeline_composes_datetime_and_drops_sources() {
    let (df, _) = run_cleaning(raw_frame()).unwrap();
    assert!(!has_column(&df, "date"));
    assert!(!has_column(&df, "time"));
    assert_eq!(
        value_str(&df, "datetime", 0).as_deref(),
        Some("2024-03-01 09:15:00")
    );
    // B6 had no date/time pair
    assert_eq!(value_str(&df, "datetime", 2), None);
}

#[test]
fn pipeline_output_has_unique_booking_ids() {
    let (df, _) = run_cleaning(raw_frame()).unwrap();
    let mut ids: Vec<String> = (0..df.height())
        .filter_map(|idx| value_str(&df, "booking_id", idx))
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn pipeline_is_idempotent_on_its_own_output() {
    let (clean, _) = run_cleaning(raw_frame()).unwrap();
    let (again, report) = run_cleaning(clean.clone()).unwrap();
    assert_eq!(report.rows_removed(), 0);
    assert_eq!(report.dedupe.rows_removed, 0);
    assert_eq!(report.hard_bounds.total(), 0);
    assert_eq!(report.validation.total(), 0);
    assert_eq!(report.distribution.total(), 0);
    assert!(clean.equals_missing(&again));
}

#[test]
fn empty_frame_flows_through() {
    let cols = vec![
        opt_col("Booking ID", vec![]),
        opt_col("Booking Status", vec![]),
        opt_col("Booking Value", vec![]),
    ];
    let df = DataFrame::new(cols).unwrap();
    let (df, report) = run_cleaning(df).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(report.rows_in, 0);
    assert_eq!(report.rows_out, 0);
}
