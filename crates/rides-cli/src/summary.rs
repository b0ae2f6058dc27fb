//! Terminal summary tables for a cleaning run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rides_model::BookingStatus;

use crate::types::RunResult;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if count > 0 {
        cell.fg(Color::Yellow)
    } else {
        cell
    }
}

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.options.input_path.display());
    println!("Output: {}", result.options.output_path.display());

    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Reason"),
        header_cell("Removed"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Deduplication"),
        Cell::new("duplicate booking_id"),
        count_cell(report.dedupe.rows_removed),
    ]);
    table.add_row(vec![
        Cell::new("Hard bounds"),
        Cell::new("negative value"),
        count_cell(report.hard_bounds.negative_values),
    ]);
    table.add_row(vec![
        Cell::new("Hard bounds"),
        Cell::new("rating outside 0-5"),
        count_cell(report.hard_bounds.rating_range),
    ]);
    for status in BookingStatus::ALL {
        table.add_row(vec![
            Cell::new("Business rules"),
            Cell::new(format!("{status} violation")),
            count_cell(report.validation.removed_for(status)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Distribution"),
        Cell::new("extreme booking_value"),
        count_cell(report.distribution.booking_value_outliers),
    ]);
    table.add_row(vec![
        Cell::new("Distribution"),
        Cell::new("extreme ride_distance"),
        count_cell(report.distribution.ride_distance_outliers),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} rows in, {} rows out", report.rows_in, report.rows_out))
            .fg(Color::Cyan),
        count_cell(report.rows_removed()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let metrics = &result.metrics;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Total income"),
        Cell::new(format!("${:.2}", metrics.total_income)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Average distance"),
        Cell::new(format!("{:.2} km", metrics.average_distance))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Apparent cancellation rate"),
        Cell::new(format!(
            "{:.2}%",
            metrics.apparent_cancellation_rate * 100.0
        ))
        .set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
}
