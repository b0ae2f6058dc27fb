//! Statistical outlier filtering.
//!
//! Phase 1 enforces hard domain bounds (non-negative amounts, ratings in
//! [0, 5]). Phase 2 trims the distribution tails of completed rides using
//! deliberately wide percentile-derived thresholds: the intent is to catch
//! extreme data-entry errors only, not ordinary variance. Null values are
//! never outliers.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::{debug, info};

use rides_model::columns::{
    BOOKING_STATUS, BOOKING_VALUE, NON_NEGATIVE_COLUMNS, RATING_COLUMNS, RIDE_DISTANCE,
};
use rides_model::{BookingStatus, DistributionSummary, HardBoundSummary};

use crate::data_utils::{filter_rows, has_column, value_f64, value_str};

const RATING_MIN: f64 = 0.0;
const RATING_MAX: f64 = 5.0;

/// Trimming thresholds for completed-ride booking values: values below
/// `q05 * 0.1` or above `q95 * 3` are discarded.
const VALUE_LOW_QUANTILE: f64 = 0.05;
const VALUE_HIGH_QUANTILE: f64 = 0.95;
const VALUE_LOW_MULTIPLIER: f64 = 0.1;
const VALUE_HIGH_MULTIPLIER: f64 = 3.0;

/// Completed-ride distances above `q95 * 2` are discarded.
const DISTANCE_QUANTILE: f64 = 0.95;
const DISTANCE_MULTIPLIER: f64 = 2.0;

/// Phase 1: remove records breaking fixed domain constraints.
///
/// Negative amounts/distances/durations first, then out-of-range ratings,
/// so a record bad in both ways is attributed to the negative-value count.
pub fn apply_hard_bounds(df: DataFrame) -> Result<(DataFrame, HardBoundSummary)> {
    let mut summary = HardBoundSummary::default();

    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let negative = NON_NEGATIVE_COLUMNS
            .iter()
            .any(|column| value_f64(&df, column, idx).is_some_and(|value| value < 0.0));
        if negative {
            summary.negative_values += 1;
        }
        keep.push(!negative);
    }
    let df = filter_rows(&df, &keep)?;

    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let out_of_range = RATING_COLUMNS.iter().any(|column| {
            value_f64(&df, column, idx)
                .is_some_and(|value| !(RATING_MIN..=RATING_MAX).contains(&value))
        });
        if out_of_range {
            summary.rating_range += 1;
        }
        keep.push(!out_of_range);
    }
    let df = filter_rows(&df, &keep)?;

    if summary.negative_values > 0 {
        info!(removed = summary.negative_values, "removed records with negative values");
    }
    if summary.rating_range > 0 {
        info!(removed = summary.rating_range, "removed records with ratings outside 0-5");
    }
    Ok((df, summary))
}

/// Linear-interpolation quantile over a sorted, non-empty sample.
fn quantile_linear(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q * (sorted.len() - 1) as f64;
    let low = position.floor() as usize;
    let high = position.ceil() as usize;
    if low == high {
        return Some(sorted[low]);
    }
    let fraction = position - low as f64;
    Some(sorted[low] + (sorted[high] - sorted[low]) * fraction)
}

fn completed_values(df: &DataFrame, column: &str) -> Vec<f64> {
    let mut values = Vec::new();
    for idx in 0..df.height() {
        if !is_completed(df, idx) {
            continue;
        }
        if let Some(value) = value_f64(df, column, idx) {
            values.push(value);
        }
    }
    values.sort_by(f64::total_cmp);
    values
}

fn is_completed(df: &DataFrame, idx: usize) -> bool {
    value_str(df, BOOKING_STATUS, idx)
        .and_then(|text| BookingStatus::parse(&text))
        .is_some_and(|status| status == BookingStatus::Completed)
}

/// Phase 2: distribution trimming, completed rides only.
///
/// Both quantile samples are taken from the frame as it enters this phase;
/// the distance trim does not re-sample after the value trim.
pub fn trim_completed_distribution(df: DataFrame) -> Result<(DataFrame, DistributionSummary)> {
    let mut summary = DistributionSummary::default();
    if !has_column(&df, BOOKING_STATUS) {
        return Ok((df, summary));
    }

    let value_bounds = if has_column(&df, BOOKING_VALUE) {
        let sample = completed_values(&df, BOOKING_VALUE);
        let low = quantile_linear(&sample, VALUE_LOW_QUANTILE);
        let high = quantile_linear(&sample, VALUE_HIGH_QUANTILE);
        low.zip(high)
            .map(|(q05, q95)| (q05 * VALUE_LOW_MULTIPLIER, q95 * VALUE_HIGH_MULTIPLIER))
    } else {
        None
    };
    let distance_cap = if has_column(&df, RIDE_DISTANCE) {
        quantile_linear(&completed_values(&df, RIDE_DISTANCE), DISTANCE_QUANTILE)
            .map(|q95| q95 * DISTANCE_MULTIPLIER)
    } else {
        None
    };
    debug!(?value_bounds, ?distance_cap, "distribution trimming thresholds");

    let df = match value_bounds {
        Some((low, high)) => {
            let mut keep = Vec::with_capacity(df.height());
            for idx in 0..df.height() {
                let extreme = is_completed(&df, idx)
                    && value_f64(&df, BOOKING_VALUE, idx)
                        .is_some_and(|value| value < low || value > high);
                if extreme {
                    summary.booking_value_outliers += 1;
                }
                keep.push(!extreme);
            }
            filter_rows(&df, &keep)?
        }
        None => df,
    };

    let df = match distance_cap {
        Some(cap) => {
            let mut keep = Vec::with_capacity(df.height());
            for idx in 0..df.height() {
                let extreme = is_completed(&df, idx)
                    && value_f64(&df, RIDE_DISTANCE, idx).is_some_and(|value| value > cap);
                if extreme {
                    summary.ride_distance_outliers += 1;
                }
                keep.push(!extreme);
            }
            filter_rows(&df, &keep)?
        }
        None => df,
    };

    if summary.booking_value_outliers > 0 {
        info!(
            removed = summary.booking_value_outliers,
            "removed completed rides with extreme booking_value"
        );
    }
    if summary.ride_distance_outliers > 0 {
        info!(
            removed = summary.ride_distance_outliers,
            "removed completed rides with extreme ride_distance"
        );
    }
    Ok((df, summary))
}
