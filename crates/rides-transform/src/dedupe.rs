//! Deduplication by the `booking_id` business key.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::info;

use rides_model::columns::BOOKING_ID;
use rides_model::{DedupeSummary, EtlError};

use crate::data_utils::{filter_rows, has_column, value_str};

/// Remove records sharing a `booking_id`, keeping the first occurrence.
///
/// Records with a missing key are always kept; a missing key cannot place a
/// record in a duplicate group.
pub fn dedupe_bookings(df: DataFrame) -> Result<(DataFrame, DedupeSummary)> {
    if !has_column(&df, BOOKING_ID) {
        return Err(EtlError::Schema {
            column: BOOKING_ID.to_string(),
        }
        .into());
    }
    let mut occurrences: BTreeMap<String, usize> = BTreeMap::new();
    for idx in 0..df.height() {
        if let Some(key) = value_str(&df, BOOKING_ID, idx) {
            *occurrences.entry(key).or_insert(0) += 1;
        }
    }
    let duplicate_groups = occurrences.values().filter(|count| **count > 1).count();
    let rows_removed: usize = occurrences
        .values()
        .filter(|count| **count > 1)
        .map(|count| count - 1)
        .sum();
    let summary = DedupeSummary {
        duplicate_groups,
        rows_removed,
    };
    if summary.found_duplicates() {
        info!(
            groups = summary.duplicate_groups,
            rows = summary.rows_removed,
            "duplicates found by booking_id"
        );
    } else {
        info!("no duplicates found by booking_id");
        return Ok((df, summary));
    }
    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        match value_str(&df, BOOKING_ID, idx) {
            Some(key) => keep.push(seen.insert(key)),
            None => keep.push(true),
        }
    }
    let filtered = filter_rows(&df, &keep)?;
    Ok((filtered, summary))
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    use crate::data_utils::value_f64;

    use super::*;

    fn df_with_ids(ids: Vec<Option<&str>>, values: Vec<Option<f64>>) -> DataFrame {
        let cols: Vec<Column> = vec![
            Series::new(
                BOOKING_ID.into(),
                ids.iter().map(|v| v.map(str::to_string)).collect::<Vec<_>>(),
            )
            .into_column(),
            Series::new("booking_value".into(), values).into_column(),
        ];
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn keeps_first_occurrence_and_reports_counts() {
        let df = df_with_ids(
            vec![Some("B1"), Some("B1"), Some("B2")],
            vec![Some(100.0), Some(999.0), Some(50.0)],
        );
        let (df, summary) = dedupe_bookings(df).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(summary.duplicate_groups, 1);
        assert_eq!(summary.rows_removed, 1);
        // first occurrence wins
        assert_eq!(value_f64(&df, "booking_value", 0), Some(100.0));
    }

    #[test]
    fn no_duplicates_reports_zero_counts() {
        let df = df_with_ids(vec![Some("B1"), Some("B2")], vec![None, None]);
        let (df, summary) = dedupe_bookings(df).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(summary, DedupeSummary::default());
    }

    #[test]
    fn null_keys_are_never_grouped() {
        let df = df_with_ids(vec![None, None, Some("B1")], vec![None, None, None]);
        let (df, summary) = dedupe_bookings(df).unwrap();
        assert_eq!(df.height(), 3);
        assert!(!summary.found_duplicates());
    }

    #[test]
    fn missing_key_column_is_a_schema_error() {
        let cols: Vec<Column> =
            vec![Series::new("booking_value".into(), vec![Some(1.0)]).into_column()];
        let df = DataFrame::new(cols).unwrap();
        let err = dedupe_bookings(df).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EtlError>(),
            Some(EtlError::Schema { .. })
        ));
    }
}
