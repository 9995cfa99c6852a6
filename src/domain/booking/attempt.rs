//! Booking attempt record.
//!
//! A `BookingAttempt` is scoped to one run of the booking dialogue. It
//! collects the details the dialogue gathers and records the final
//! outcome. Attempts are never persisted beyond the dialogue.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Restaurant;

/// Outcome of a booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// The dialogue is still collecting details.
    #[default]
    InProgress,

    /// The user confirmed the final summary.
    Confirmed,

    /// The user declined at one of the confirmation steps.
    Cancelled,

    /// The requested restaurant is not in the catalog.
    NotFound,
}

impl BookingStatus {
    /// Returns a short label for the status, suitable for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::NotFound => "not_found",
        }
    }

    /// Returns true once the attempt has reached an outcome.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Details collected over one run of the booking dialogue.
///
/// # Invariants
///
/// - `requested_time` is stored lowercased; `chosen_time` keeps the
///   catalog's canonical spelling
/// - `party_size` is opaque text, captured without numeric validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingAttempt {
    restaurant: Option<Restaurant>,
    requested_date: Option<String>,
    requested_time: Option<String>,
    chosen_time: Option<String>,
    party_size: Option<String>,
    status: BookingStatus,
}

impl BookingAttempt {
    /// Creates an empty in-progress attempt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matched restaurant, if one was found.
    pub fn restaurant(&self) -> Option<&Restaurant> {
        self.restaurant.as_ref()
    }

    /// Returns the requested date, if captured.
    pub fn requested_date(&self) -> Option<&str> {
        self.requested_date.as_deref()
    }

    /// Returns the requested time, lowercased, if captured.
    pub fn requested_time(&self) -> Option<&str> {
        self.requested_time.as_deref()
    }

    /// Returns the slot substituted for an unavailable request, if any.
    pub fn chosen_time(&self) -> Option<&str> {
        self.chosen_time.as_deref()
    }

    /// Returns the captured party size, if any.
    pub fn party_size(&self) -> Option<&str> {
        self.party_size.as_deref()
    }

    /// Returns the attempt's current status.
    pub fn status(&self) -> BookingStatus {
        self.status
    }

    /// The time the booking is actually for: the substituted slot when
    /// one was picked, otherwise the originally requested time.
    pub fn effective_time(&self) -> Option<&str> {
        self.chosen_time.as_deref().or(self.requested_time.as_deref())
    }

    /// Stores the matched restaurant.
    pub fn set_restaurant(&mut self, restaurant: Restaurant) {
        self.restaurant = Some(restaurant);
    }

    /// Stores the validated date and time. The time is lowercased here
    /// so availability checks and replies agree on one spelling.
    pub fn set_schedule(&mut self, date: impl Into<String>, time: &str) {
        self.requested_date = Some(date.into());
        self.requested_time = Some(time.to_lowercase());
    }

    /// Stores the slot picked in place of an unavailable request.
    /// Callers pass the catalog's canonical spelling.
    pub fn choose_time(&mut self, slot: impl Into<String>) {
        self.chosen_time = Some(slot.into());
    }

    /// Stores the party size as given.
    pub fn set_party_size(&mut self, party_size: impl Into<String>) {
        self.party_size = Some(party_size.into());
    }

    /// Marks the attempt confirmed.
    pub fn confirm(&mut self) {
        self.status = BookingStatus::Confirmed;
    }

    /// Marks the attempt cancelled.
    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
    }

    /// Marks the attempt as targeting an unknown restaurant.
    pub fn mark_not_found(&mut self) {
        self.status = BookingStatus::NotFound;
    }
}
