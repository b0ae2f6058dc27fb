pub mod metrics;

pub use metrics::{apparent_cancellation_rate, average_distance, compute_metrics, total_income};
