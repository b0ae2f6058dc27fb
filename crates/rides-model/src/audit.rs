//! Per-stage audit summaries and the aggregate cleaning report.
//!
//! Every destructive stage reports what it removed and why. Formatting is a
//! presentation concern; only the counts and their attribution are part of
//! the contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::status::BookingStatus;

/// Outcome of the deduplication stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupeSummary {
    /// Number of `booking_id` values shared by two or more records.
    pub duplicate_groups: usize,
    /// Records dropped beyond the first occurrence of each key.
    pub rows_removed: usize,
}

impl DedupeSummary {
    pub fn found_duplicates(&self) -> bool {
        self.duplicate_groups > 0
    }
}

/// Outcome of hard-bound filtering (phase 1 of the outlier filter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardBoundSummary {
    /// Records with a present negative amount, distance, or duration.
    pub negative_values: usize,
    /// Records with a present rating outside [0, 5].
    pub rating_range: usize,
}

impl HardBoundSummary {
    pub fn total(&self) -> usize {
        self.negative_values + self.rating_range
    }
}

/// Outcome of the rule-based validator, keyed by booking status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub removed_by_status: BTreeMap<BookingStatus, usize>,
}

impl ValidationSummary {
    pub fn record(&mut self, status: BookingStatus) {
        *self.removed_by_status.entry(status).or_insert(0) += 1;
    }

    pub fn removed_for(&self, status: BookingStatus) -> usize {
        self.removed_by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.removed_by_status.values().sum()
    }
}

/// Outcome of distribution trimming (phase 2 of the outlier filter,
/// completed rides only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub booking_value_outliers: usize,
    pub ride_distance_outliers: usize,
}

impl DistributionSummary {
    pub fn total(&self) -> usize {
        self.booking_value_outliers + self.ride_distance_outliers
    }
}

/// Aggregate report for one cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub rows_in: usize,
    pub rows_out: usize,
    pub dedupe: DedupeSummary,
    pub hard_bounds: HardBoundSummary,
    pub validation: ValidationSummary,
    pub distribution: DistributionSummary,
}

impl CleaningReport {
    pub fn rows_removed(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

/// Business metrics computed over the cleaned dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetrics {
    /// Sum of non-null booking values.
    pub total_income: f64,
    /// Mean of non-null ride distances.
    pub average_distance: f64,
    /// Share of records whose status text contains "cancel".
    pub apparent_cancellation_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_summary_accumulates_per_status() {
        let mut summary = ValidationSummary::default();
        summary.record(BookingStatus::Completed);
        summary.record(BookingStatus::Completed);
        summary.record(BookingStatus::Incomplete);
        assert_eq!(summary.removed_for(BookingStatus::Completed), 2);
        assert_eq!(summary.removed_for(BookingStatus::Incomplete), 1);
        assert_eq!(summary.removed_for(BookingStatus::DriverNotFound), 0);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn report_counts_removed_rows() {
        let report = CleaningReport {
            rows_in: 10,
            rows_out: 7,
            ..CleaningReport::default()
        };
        assert_eq!(report.rows_removed(), 3);
    }

    #[test]
    fn report_serializes() {
        let mut report = CleaningReport {
            rows_in: 2,
            rows_out: 1,
            ..CleaningReport::default()
        };
        report.validation.record(BookingStatus::CancelledByDriver);
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: CleaningReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }
}
