use rides_model::{BusinessMetrics, CleaningReport, PipelineOptions};

/// Everything one `run` invocation produced, for the summary printer.
#[derive(Debug)]
pub struct RunResult {
    pub options: PipelineOptions,
    pub report: CleaningReport,
    pub metrics: BusinessMetrics,
}
