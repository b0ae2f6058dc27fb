use serde::{Deserialize, Serialize};

/// Outcome status of a ride booking, as it appears after categorical
/// normalization (lowercase, underscores).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Completed,
    CancelledByCustomer,
    CancelledByDriver,
    Incomplete,
    DriverNotFound,
}

impl BookingStatus {
    /// All statuses the cleaning rules know about.
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Completed,
        BookingStatus::CancelledByCustomer,
        BookingStatus::CancelledByDriver,
        BookingStatus::Incomplete,
        BookingStatus::DriverNotFound,
    ];

    /// Canonical normalized text for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Completed => "completed",
            BookingStatus::CancelledByCustomer => "cancelled_by_customer",
            BookingStatus::CancelledByDriver => "cancelled_by_driver",
            BookingStatus::Incomplete => "incomplete",
            BookingStatus::DriverNotFound => "driver_not_found",
        }
    }

    /// Parse normalized status text. Unknown statuses return `None` and
    /// pass through the validator unvalidated.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "completed" => Some(BookingStatus::Completed),
            "cancelled_by_customer" => Some(BookingStatus::CancelledByCustomer),
            "cancelled_by_driver" => Some(BookingStatus::CancelledByDriver),
            "incomplete" => Some(BookingStatus::Incomplete),
            "driver_not_found" => Some(BookingStatus::DriverNotFound),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_canonical_text() {
        for status in BookingStatus::ALL {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_unnormalized_text() {
        assert_eq!(BookingStatus::parse("Completed"), None);
        assert_eq!(BookingStatus::parse("no driver found"), None);
        assert_eq!(BookingStatus::parse(""), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&BookingStatus::CancelledByDriver).unwrap();
        assert_eq!(json, "\"cancelled_by_driver\"");
    }
}
