pub mod csv_table;
pub mod frame;
pub mod output;
pub mod polars_utils;

pub use csv_table::{CsvTable, read_booking_table};
pub use frame::frame_from_table;
pub use output::write_booking_frame;
pub use polars_utils::{
    any_to_f64, any_to_string, any_to_string_for_output, format_numeric, parse_f64,
};
