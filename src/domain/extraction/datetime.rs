//! Date/time validation for booking requests.
//!
//! Accepts exactly the `dd-mm-yyyy h:mm am/pm` wire format. Validation is
//! purely syntactic: day 32 or month 13 pass through, because slot
//! comparison downstream only needs the literal text the user typed.

use once_cell::sync::Lazy;
use regex::Regex;

static DATE_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d{2}-\d{2}-\d{4})\s(\d{1,2}:\d{2}\s?(am|pm))$")
        .expect("date/time pattern is valid")
});

/// A syntactically valid booking date and time.
///
/// `time` is kept exactly as typed, meridiem casing included; callers
/// normalize when they compare against catalog slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDateTime {
    pub date: String,
    pub time: String,
}

/// Validates a date/time utterance against the booking wire format.
///
/// Day and month are exactly two digits, year four, hour one or two,
/// minute two, with an optional single space before the am/pm marker.
/// Returns `None` on any other shape.
pub fn validate_date_time(text: &str) -> Option<BookingDateTime> {
    let captures = DATE_TIME_PATTERN.captures(text)?;
    let date = captures.get(1)?.as_str().to_string();
    let time = captures.get(2)?.as_str().to_string();
    Some(BookingDateTime { date, time })
}
