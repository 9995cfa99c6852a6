//! Extraction module - pulling structured slots out of free text.
//!
//! - `name` - Self-introduction phrase capture
//! - `datetime` - Booking date/time format validation

mod datetime;
mod name;

pub use datetime::{validate_date_time, BookingDateTime};
pub use name::extract_name;
