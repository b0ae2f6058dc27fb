//! Canonical column names for the ride-booking schema.
//!
//! Raw input headers arrive in arbitrary casing with spaces; after schema
//! normalization every column matches one of these names.

pub const BOOKING_ID: &str = "booking_id";
pub const BOOKING_STATUS: &str = "booking_status";
pub const BOOKING_VALUE: &str = "booking_value";
pub const RIDE_DISTANCE: &str = "ride_distance";
pub const AVG_VTAT: &str = "avg_vtat";
pub const AVG_CTAT: &str = "avg_ctat";
pub const DRIVER_RATINGS: &str = "driver_ratings";
pub const CUSTOMER_RATING: &str = "customer_rating";
pub const REASON_FOR_CANCELLING_BY_CUSTOMER: &str = "reason_for_cancelling_by_customer";
pub const DRIVER_CANCELLATION_REASON: &str = "driver_cancellation_reason";
pub const INCOMPLETE_RIDES_REASON: &str = "incomplete_rides_reason";
pub const DATE: &str = "date";
pub const TIME: &str = "time";
pub const DATETIME: &str = "datetime";

/// Columns coerced to `Float64` by the schema normalizer. Coercion failure
/// on a non-null value is fatal.
pub const NUMERIC_COLUMNS: [&str; 9] = [
    AVG_VTAT,
    AVG_CTAT,
    "cancelled_rides_by_customer",
    "cancelled_rides_by_driver",
    "incomplete_rides",
    BOOKING_VALUE,
    RIDE_DISTANCE,
    DRIVER_RATINGS,
    CUSTOMER_RATING,
];

/// Categorical string columns whose values are lowercased with spaces
/// replaced by underscores. Nulls pass through unchanged.
pub const CATEGORICAL_COLUMNS: [&str; 8] = [
    BOOKING_STATUS,
    "vehicle_type",
    "pickup_location",
    "drop_location",
    REASON_FOR_CANCELLING_BY_CUSTOMER,
    DRIVER_CANCELLATION_REASON,
    INCOMPLETE_RIDES_REASON,
    "payment_method",
];

/// Columns that must be non-negative when present.
pub const NON_NEGATIVE_COLUMNS: [&str; 4] = [BOOKING_VALUE, RIDE_DISTANCE, AVG_VTAT, AVG_CTAT];

/// Rating columns constrained to the [0, 5] range when present.
pub const RATING_COLUMNS: [&str; 2] = [DRIVER_RATINGS, CUSTOMER_RATING];
