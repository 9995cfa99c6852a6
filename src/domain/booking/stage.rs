//! Booking dialogue state machine.
//!
//! Defines the stages of the table-reservation flow and valid
//! transitions between them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The current stage of a booking dialogue.
///
/// Stages flow from name capture to a closed attempt:
/// - `AskName` → `AskRestaurant` → `AskDateTime` → `ConfirmSlot` or
///   `ChooseSlot` → `AskPartySize` → `ConfirmDetails` → `Closed`
///
/// `AskDateTime` re-enters itself on malformed input, and several
/// stages can close the dialogue early (unknown restaurant, declined
/// confirmation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStage {
    /// Waiting for the user to state their name.
    #[default]
    AskName,

    /// Waiting for a restaurant name to match against the catalog.
    AskRestaurant,

    /// Waiting for a date and time in the accepted format.
    AskDateTime,

    /// Requested time is available; waiting for a yes/no answer.
    ConfirmSlot,

    /// Requested time is taken; waiting for a pick from the listed slots.
    ChooseSlot,

    /// Waiting for the number of attendees.
    AskPartySize,

    /// Summary presented; waiting for the final yes/no answer.
    ConfirmDetails,

    /// The attempt finished; no further input is consumed.
    Closed,
}

impl BookingStage {
    /// Returns a short label for the stage, suitable for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AskName => "ask_name",
            Self::AskRestaurant => "ask_restaurant",
            Self::AskDateTime => "ask_date_time",
            Self::ConfirmSlot => "confirm_slot",
            Self::ChooseSlot => "choose_slot",
            Self::AskPartySize => "ask_party_size",
            Self::ConfirmDetails => "confirm_details",
            Self::Closed => "closed",
        }
    }

    /// Returns true if this stage expects a yes/no answer.
    pub fn is_confirmation(&self) -> bool {
        matches!(self, Self::ConfirmSlot | Self::ConfirmDetails)
    }

    /// Returns true if this is the terminal stage.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl StateMachine for BookingStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use BookingStage::*;
        matches!(
            (self, target),
            // Name captured (or skipped), move on to the restaurant
            (AskName, AskRestaurant) |
            // Catalog match found
            (AskRestaurant, AskDateTime) |
            // No catalog match, the attempt ends
            (AskRestaurant, Closed) |
            // Malformed date/time re-prompts
            (AskDateTime, AskDateTime) |
            // Requested time is available
            (AskDateTime, ConfirmSlot) |
            // Requested time is taken, offer the open slots
            (AskDateTime, ChooseSlot) |
            // User agreed to proceed
            (ConfirmSlot, AskPartySize) |
            // User declined
            (ConfirmSlot, Closed) |
            // User picked a listed slot
            (ChooseSlot, AskPartySize) |
            // User picked nothing recognizable
            (ChooseSlot, Closed) |
            // Party size captured, present the summary
            (AskPartySize, ConfirmDetails) |
            // Final answer, confirmed or cancelled
            (ConfirmDetails, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use BookingStage::*;
        match self {
            AskName => vec![AskRestaurant],
            AskRestaurant => vec![AskDateTime, Closed],
            AskDateTime => vec![AskDateTime, ConfirmSlot, ChooseSlot],
            ConfirmSlot => vec![AskPartySize, Closed],
            ChooseSlot => vec![AskPartySize, Closed],
            AskPartySize => vec![ConfirmDetails],
            ConfirmDetails => vec![Closed],
            Closed => vec![],
        }
    }
}
