pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;

pub use commands::{run_clean, run_rules};
pub use types::RunResult;
