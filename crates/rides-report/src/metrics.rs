//! Read-only business metrics over the cleaned dataset.
//!
//! Absent columns, empty frames, and all-null columns all yield 0.0;
//! nothing here can fail or divide by zero.

use polars::prelude::DataFrame;

use rides_model::BusinessMetrics;
use rides_model::columns::{BOOKING_STATUS, BOOKING_VALUE, RIDE_DISTANCE};
use rides_transform::{has_column, value_f64, value_str};

/// Sum of non-null booking values.
pub fn total_income(df: &DataFrame) -> f64 {
    if !has_column(df, BOOKING_VALUE) {
        return 0.0;
    }
    (0..df.height())
        .filter_map(|idx| value_f64(df, BOOKING_VALUE, idx))
        .sum()
}

/// Mean of non-null ride distances.
pub fn average_distance(df: &DataFrame) -> f64 {
    if !has_column(df, RIDE_DISTANCE) {
        return 0.0;
    }
    let values: Vec<f64> = (0..df.height())
        .filter_map(|idx| value_f64(df, RIDE_DISTANCE, idx))
        .collect();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Share of records whose status text contains "cancel", case-insensitive.
pub fn apparent_cancellation_rate(df: &DataFrame) -> f64 {
    if !has_column(df, BOOKING_STATUS) || df.height() == 0 {
        return 0.0;
    }
    let cancelled = (0..df.height())
        .filter(|idx| {
            value_str(df, BOOKING_STATUS, *idx)
                .is_some_and(|text| text.to_lowercase().contains("cancel"))
        })
        .count();
    cancelled as f64 / df.height() as f64
}

/// All three metrics in one pass-friendly bundle.
pub fn compute_metrics(df: &DataFrame) -> BusinessMetrics {
    BusinessMetrics {
        total_income: total_income(df),
        average_distance: average_distance(df),
        apparent_cancellation_rate: apparent_cancellation_rate(df),
    }
}
