//! The cleaning pipeline: one linear pass over an owned frame.
//!
//! Stage order is a contract, not an implementation detail. Hard-bound
//! filtering runs before the rule validator so that removal reasons are
//! attributed unambiguously, and distribution trimming runs last over the
//! already-validated completed rides.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::info;

use rides_model::CleaningReport;

use crate::datetime::compose_datetime;
use crate::dedupe::dedupe_bookings;
use crate::outliers::{apply_hard_bounds, trim_completed_distribution};
use crate::rules::validate_status_rules;
use crate::schema::normalize_schema;

/// Run the full cleaning pipeline over a raw frame.
///
/// Returns the cleaned frame plus the audit report. Rerunning on the
/// output removes nothing further.
pub fn run_cleaning(df: DataFrame) -> Result<(DataFrame, CleaningReport)> {
    let rows_in = df.height();
    info!(rows = rows_in, "cleaning started");

    let df = normalize_schema(df)?;
    info!(rows = df.height(), "schema normalized");

    let df = compose_datetime(df)?;
    info!(rows = df.height(), "datetime composed");

    let (df, dedupe) = dedupe_bookings(df)?;
    info!(rows = df.height(), removed = dedupe.rows_removed, "deduplicated");

    let (df, hard_bounds) = apply_hard_bounds(df)?;
    info!(rows = df.height(), removed = hard_bounds.total(), "hard bounds applied");

    let (df, validation) = validate_status_rules(df)?;
    info!(rows = df.height(), removed = validation.total(), "status rules applied");

    let (df, distribution) = trim_completed_distribution(df)?;
    info!(rows = df.height(), removed = distribution.total(), "distribution trimmed");

    let report = CleaningReport {
        rows_in,
        rows_out: df.height(),
        dedupe,
        hard_bounds,
        validation,
        distribution,
    };
    info!(
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        removed = report.rows_removed(),
        "cleaning finished"
    );
    Ok((df, report))
}
