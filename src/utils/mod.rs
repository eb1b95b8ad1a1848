//! Utility modules for common functionality

pub mod dates;
pub mod filters;
pub mod validators;

// Re-export commonly used functions
pub use dates::{WeekWindow, parse_date, start_of_week, week_windows};
pub use filters::{DateFilter, Dated};
pub use validators::{validate_settings, validation_errors_to_anyhow};
