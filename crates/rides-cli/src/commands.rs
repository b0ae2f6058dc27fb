use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use rides_ingest::{frame_from_table, read_booking_table, write_booking_frame};
use rides_model::PipelineOptions;
use rides_report::compute_metrics;
use rides_transform::{STATUS_RULES, run_cleaning};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;
use crate::types::RunResult;

/// Run the full ETL: read, clean, write, measure.
pub fn run_clean(args: &RunArgs) -> Result<RunResult> {
    let options = PipelineOptions::new(&args.input, args.output_path());
    let span = info_span!("etl", input = %options.input_path.display());
    let _guard = span.enter();

    let table = read_booking_table(&options.input_path)
        .with_context(|| format!("extract {}", options.input_path.display()))?;
    let df = frame_from_table(&table).context("materialize frame")?;
    info!(rows = df.height(), columns = df.width(), "extracted raw data");

    let (df, report) = run_cleaning(df).context("clean dataset")?;

    write_booking_frame(&df, &options.output_path)
        .with_context(|| format!("load {}", options.output_path.display()))?;

    let metrics = compute_metrics(&df);
    Ok(RunResult {
        options,
        report,
        metrics,
    })
}

/// Print the per-status field rules the validator enforces.
pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Status", "Required present", "Required absent"]);
    apply_table_style(&mut table);
    for rule in &STATUS_RULES {
        table.add_row(vec![
            rule.status.to_string(),
            rule.require_present.join("\n"),
            rule.require_absent.join("\n"),
        ]);
    }
    println!("{table}");
    Ok(())
}
