//! Schema normalization: canonical column names, numeric coercion, and
//! categorical value normalization.
//!
//! Every operation here is idempotent; re-running on normalized data is a
//! no-op.

use anyhow::Result;
use polars::prelude::{AnyValue, DataFrame, DataType, NamedFrom, Series};

use rides_ingest::parse_f64;
use rides_model::EtlError;
use rides_model::columns::{CATEGORICAL_COLUMNS, NUMERIC_COLUMNS};

use crate::data_utils::has_column;

/// Lowercase column names and replace spaces with underscores.
pub fn normalize_column_names(mut df: DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_lowercase().replace(' ', "_"))
        .collect();
    df.set_column_names(names)?;
    Ok(df)
}

/// Coerce the designated numeric columns to `Float64`.
///
/// Nulls pass through; any non-null value that does not parse as a number
/// is fatal. Columns already holding floats are rebuilt unchanged.
pub fn coerce_numeric_columns(mut df: DataFrame) -> Result<DataFrame> {
    for name in NUMERIC_COLUMNS {
        if !has_column(&df, name) {
            continue;
        }
        let values = {
            let column = df.column(name)?;
            let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());
            for idx in 0..df.height() {
                let parsed = match column.get(idx).unwrap_or(AnyValue::Null) {
                    AnyValue::Null => None,
                    AnyValue::String(text) => coerce_value(name, text)?,
                    AnyValue::StringOwned(text) => coerce_value(name, &text)?,
                    AnyValue::Float64(value) => Some(value),
                    AnyValue::Float32(value) => Some(value as f64),
                    AnyValue::Int64(value) => Some(value as f64),
                    AnyValue::Int32(value) => Some(value as f64),
                    other => {
                        return Err(EtlError::TypeCoercion {
                            column: name.to_string(),
                            value: other.to_string(),
                        }
                        .into());
                    }
                };
                values.push(parsed);
            }
            values
        };
        df.with_column(Series::new(name.into(), values))?;
    }
    Ok(df)
}

fn coerce_value(column: &str, text: &str) -> Result<Option<f64>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    match parse_f64(text) {
        Some(value) => Ok(Some(value)),
        None => Err(EtlError::TypeCoercion {
            column: column.to_string(),
            value: text.to_string(),
        }
        .into()),
    }
}

/// Lowercase the designated categorical string columns and replace spaces
/// with underscores. Nulls pass through unchanged.
pub fn normalize_categorical_values(mut df: DataFrame) -> Result<DataFrame> {
    for name in CATEGORICAL_COLUMNS {
        if !has_column(&df, name) {
            continue;
        }
        let values = {
            let column = df.column(name)?;
            if column.dtype() != &DataType::String {
                continue;
            }
            let mut values: Vec<Option<String>> = Vec::with_capacity(df.height());
            for idx in 0..df.height() {
                let value = match column.get(idx).unwrap_or(AnyValue::Null) {
                    AnyValue::String(text) => Some(text.to_lowercase().replace(' ', "_")),
                    AnyValue::StringOwned(text) => Some(text.to_lowercase().replace(' ', "_")),
                    _ => None,
                };
                values.push(value);
            }
            values
        };
        df.with_column(Series::new(name.into(), values))?;
    }
    Ok(df)
}

/// Full schema normalization pass: names, then numeric types, then
/// categorical values.
pub fn normalize_schema(df: DataFrame) -> Result<DataFrame> {
    let df = normalize_column_names(df)?;
    let df = coerce_numeric_columns(df)?;
    normalize_categorical_values(df)
}
