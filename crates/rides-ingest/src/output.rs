use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};

use crate::polars_utils::any_to_string_for_output;

/// Write the cleaned frame as a CSV file without a row-index column.
///
/// Missing parent directories are created. Null cells are written as empty
/// strings.
pub fn write_booking_frame(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer
        .write_record(&headers)
        .with_context(|| format!("write header: {}", path.display()))?;
    for idx in 0..df.height() {
        let mut record = Vec::with_capacity(headers.len());
        for column in df.get_columns() {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            record.push(any_to_string_for_output(value));
        }
        writer
            .write_record(&record)
            .with_context(|| format!("write row {idx}: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = df.height(), "wrote cleaned dataset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    use super::*;

    fn sample_frame() -> DataFrame {
        let cols: Vec<Column> = vec![
            Series::new(
                "booking_id".into(),
                vec![Some("B1".to_string()), Some("B2".to_string())],
            )
            .into_column(),
            Series::new("booking_value".into(), vec![Some(100.0), None]).into_column(),
        ];
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn writes_headers_rows_and_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/ride_bookings.csv");
        write_booking_frame(&sample_frame(), &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("booking_id,booking_value"));
        assert_eq!(lines.next(), Some("B1,100"));
        assert_eq!(lines.next(), Some("B2,"));
    }
}
