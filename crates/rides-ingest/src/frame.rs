use anyhow::Result;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::csv_table::CsvTable;

/// Materialize an untyped CSV table as a DataFrame of nullable string
/// columns. Empty cells become nulls; type coercion happens downstream.
pub fn frame_from_table(table: &CsvTable) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (idx, header) in table.headers.iter().enumerate() {
        let values: Vec<Option<String>> = table
            .rows
            .iter()
            .map(|row| {
                row.get(idx)
                    .map(String::as_str)
                    .filter(|value| !value.trim().is_empty())
                    .map(str::to_string)
            })
            .collect();
        columns.push(Series::new(header.as_str().into(), values).into_column());
    }
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use polars::prelude::AnyValue;

    use super::*;

    #[test]
    fn builds_nullable_string_columns() {
        let table = CsvTable {
            headers: vec!["Booking ID".into(), "Booking Value".into()],
            rows: vec![
                vec!["B1".into(), "100".into()],
                vec!["B2".into(), "".into()],
            ],
        };
        let df = frame_from_table(&table).unwrap();
        assert_eq!(df.height(), 2);
        let value = df.column("Booking Value").unwrap();
        assert_eq!(value.get(0).unwrap(), AnyValue::String("100"));
        assert_eq!(value.get(1).unwrap(), AnyValue::Null);
    }

    #[test]
    fn empty_table_yields_empty_frame() {
        let table = CsvTable {
            headers: vec!["Booking ID".into()],
            rows: vec![],
        };
        let df = frame_from_table(&table).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 1);
    }
}
