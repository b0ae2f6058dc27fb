pub mod audit;
pub mod columns;
pub mod error;
pub mod options;
pub mod status;

pub use audit::{
    BusinessMetrics, CleaningReport, DedupeSummary, DistributionSummary, HardBoundSummary,
    ValidationSummary,
};
pub use error::{EtlError, Result};
pub use options::PipelineOptions;
pub use status::BookingStatus;
