use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// Raw CSV contents: one header row plus string cells, untyped.
///
/// The input schema is fixed and known, so the first row is always the
/// header. Cells are trimmed; typing happens later in the transform crate.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a ride-booking CSV into an untyped table.
///
/// Rows that are entirely empty are skipped. Short rows are padded with
/// empty cells so every row matches the header width.
pub fn read_booking_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header: {}", path.display()))?
        .iter()
        .map(normalize_cell)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded csv table"
    );
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn reads_header_and_rows() {
        let file = write_temp("Booking ID,Booking Value\nB1,100\nB2,200\n");
        let table = read_booking_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["Booking ID", "Booking Value"]);
        assert_eq!(table.rows, vec![vec!["B1", "100"], vec!["B2", "200"]]);
    }

    #[test]
    fn skips_blank_rows_and_pads_short_rows() {
        let file = write_temp("Booking ID,Booking Value\nB1,100\n,\nB2\n");
        let table = read_booking_table(file.path()).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["B2", ""]);
    }

    #[test]
    fn strips_bom_and_whitespace() {
        let file = write_temp("\u{feff}Booking ID,Date\n B1 , 2024-01-01 \n");
        let table = read_booking_table(file.path()).unwrap();
        assert_eq!(table.headers[0], "Booking ID");
        assert_eq!(table.rows[0], vec!["B1", "2024-01-01"]);
    }
}
