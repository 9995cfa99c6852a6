//! Booking domain module.
//!
//! The table-reservation flow: a staged dialogue that collects a
//! restaurant, date and time, and party size, checks slot availability,
//! and confirms or cancels the attempt.

mod attempt;
mod dialogue;
mod stage;

pub use attempt::{BookingAttempt, BookingStatus};
pub use dialogue::BookingDialogue;
pub use stage::BookingStage;
