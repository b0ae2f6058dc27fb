//! Row-level access helpers shared by the cleaning stages.

use anyhow::Result;
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};

use rides_ingest::{any_to_f64, any_to_string};

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Numeric value of a cell, `None` for nulls, absent columns, or
/// non-numeric text.
pub fn value_f64(df: &DataFrame, name: &str, idx: usize) -> Option<f64> {
    let column = df.column(name).ok()?;
    any_to_f64(column.get(idx).unwrap_or(AnyValue::Null))
}

/// Trimmed string value of a cell, `None` for nulls, absent columns, or
/// whitespace-only text.
pub fn value_str(df: &DataFrame, name: &str, idx: usize) -> Option<String> {
    let column = df.column(name).ok()?;
    let text = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Whether a cell holds a value. Absent columns and empty strings count as
/// missing, matching how empty CSV cells are materialized.
pub fn value_present(df: &DataFrame, name: &str, idx: usize) -> bool {
    let Ok(column) = df.column(name) else {
        return false;
    };
    match column.get(idx).unwrap_or(AnyValue::Null) {
        AnyValue::Null => false,
        AnyValue::String(value) => !value.trim().is_empty(),
        AnyValue::StringOwned(value) => !value.trim().is_empty(),
        _ => true,
    }
}

/// Keep the rows flagged `true`, preserving their relative order.
pub fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}
