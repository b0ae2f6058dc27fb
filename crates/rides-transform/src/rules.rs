//! Rule-based validation of field presence per booking status.
//!
//! Each status carries a fixed table of fields that must be populated and
//! fields that must be empty. The table is interpreted generically; there
//! is no per-status branching. A record violating any single condition of
//! its status's rule is removed. Statuses outside the table pass through
//! unvalidated.
//!
//! This stage must run after hard-bound filtering so that a record bad in
//! both ways is attributed to the hard-bound counts, not these.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::info;

use rides_model::columns::{
    BOOKING_STATUS, BOOKING_VALUE, CUSTOMER_RATING, DRIVER_CANCELLATION_REASON, DRIVER_RATINGS,
    INCOMPLETE_RIDES_REASON, REASON_FOR_CANCELLING_BY_CUSTOMER, RIDE_DISTANCE,
};
use rides_model::{BookingStatus, ValidationSummary};

use crate::data_utils::{filter_rows, has_column, value_present, value_str};

/// Presence/absence requirements for one booking status.
#[derive(Debug, Clone, Copy)]
pub struct StatusRule {
    pub status: BookingStatus,
    pub require_present: &'static [&'static str],
    pub require_absent: &'static [&'static str],
}

/// The full rule table, one entry per known status.
pub const STATUS_RULES: [StatusRule; 5] = [
    StatusRule {
        status: BookingStatus::Completed,
        require_present: &[BOOKING_VALUE, RIDE_DISTANCE],
        require_absent: &[
            REASON_FOR_CANCELLING_BY_CUSTOMER,
            DRIVER_CANCELLATION_REASON,
            INCOMPLETE_RIDES_REASON,
        ],
    },
    StatusRule {
        status: BookingStatus::CancelledByCustomer,
        require_present: &[REASON_FOR_CANCELLING_BY_CUSTOMER],
        require_absent: &[
            DRIVER_RATINGS,
            CUSTOMER_RATING,
            RIDE_DISTANCE,
            DRIVER_CANCELLATION_REASON,
            INCOMPLETE_RIDES_REASON,
        ],
    },
    StatusRule {
        status: BookingStatus::CancelledByDriver,
        require_present: &[DRIVER_CANCELLATION_REASON],
        require_absent: &[
            DRIVER_RATINGS,
            CUSTOMER_RATING,
            RIDE_DISTANCE,
            REASON_FOR_CANCELLING_BY_CUSTOMER,
            INCOMPLETE_RIDES_REASON,
        ],
    },
    StatusRule {
        status: BookingStatus::Incomplete,
        require_present: &[INCOMPLETE_RIDES_REASON, BOOKING_VALUE],
        require_absent: &[
            DRIVER_RATINGS,
            CUSTOMER_RATING,
            REASON_FOR_CANCELLING_BY_CUSTOMER,
            DRIVER_CANCELLATION_REASON,
        ],
    },
    StatusRule {
        status: BookingStatus::DriverNotFound,
        require_present: &[],
        require_absent: &[
            DRIVER_RATINGS,
            CUSTOMER_RATING,
            REASON_FOR_CANCELLING_BY_CUSTOMER,
            DRIVER_CANCELLATION_REASON,
            INCOMPLETE_RIDES_REASON,
        ],
    },
];

/// Look up the rule for a status.
pub fn rule_for(status: BookingStatus) -> &'static StatusRule {
    STATUS_RULES
        .iter()
        .find(|rule| rule.status == status)
        .expect("every status has a rule")
}

fn violates(rule: &StatusRule, df: &DataFrame, idx: usize) -> bool {
    rule.require_present
        .iter()
        .any(|column| !value_present(df, column, idx))
        || rule
            .require_absent
            .iter()
            .any(|column| value_present(df, column, idx))
}

/// Remove records whose field pattern contradicts their status's rule.
///
/// A silent pass-through when the status column is absent. A
/// required-present field whose column is missing counts as null, so the
/// affected records are removed rather than raising.
pub fn validate_status_rules(df: DataFrame) -> Result<(DataFrame, ValidationSummary)> {
    let mut summary = ValidationSummary::default();
    if !has_column(&df, BOOKING_STATUS) {
        return Ok((df, summary));
    }
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let status = value_str(&df, BOOKING_STATUS, idx).and_then(|text| BookingStatus::parse(&text));
        let Some(status) = status else {
            keep.push(true);
            continue;
        };
        let rule = rule_for(status);
        if violates(rule, &df, idx) {
            summary.record(status);
            keep.push(false);
        } else {
            keep.push(true);
        }
    }
    for status in BookingStatus::ALL {
        let removed = summary.removed_for(status);
        if removed > 0 {
            info!(status = %status, removed, "removed rides violating business rules");
        }
    }
    let filtered = filter_rows(&df, &keep)?;
    Ok((filtered, summary))
}
