//! Standardized logging and progress reporting

pub mod log;
pub mod progress;

pub use self::log::{log_load_complete, log_load_start};
pub use self::progress::{create_spinner, finish_and_clear};
