pub mod data_utils;
pub mod datetime;
pub mod dedupe;
pub mod outliers;
pub mod pipeline;
pub mod rules;
pub mod schema;

pub use data_utils::{filter_rows, has_column, value_f64, value_present, value_str};
pub use datetime::compose_datetime;
pub use dedupe::dedupe_bookings;
pub use outliers::{apply_hard_bounds, trim_completed_distribution};
pub use pipeline::run_cleaning;
pub use rules::{STATUS_RULES, StatusRule, rule_for, validate_status_rules};
pub use schema::{
    coerce_numeric_columns, normalize_categorical_values, normalize_column_names, normalize_schema,
};
