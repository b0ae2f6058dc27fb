//! Pipeline configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Locations for one pipeline run.
///
/// Passed explicitly to the pipeline entry point; there is no module-level
/// path state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Source CSV with the raw ride-booking records.
    pub input_path: PathBuf,
    /// Destination CSV for the cleaned dataset. Missing parent directories
    /// are created on write.
    pub output_path: PathBuf,
}

impl PipelineOptions {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}
