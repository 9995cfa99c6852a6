//! Multi-turn booking dialogue.
//!
//! Drives one table-reservation attempt: name capture, restaurant
//! lookup, date/time validation, slot availability, and a two-step
//! confirmation. Each call to `advance` consumes one user utterance and
//! yields the reply lines for that turn.

use tracing::{debug, info};

use crate::domain::catalog::{Restaurant, RestaurantCatalog};
use crate::domain::extraction;
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};
use crate::domain::session::{Session, GUEST_NAME};

use super::attempt::{BookingAttempt, BookingStatus};
use super::stage::BookingStage;

/// One run of the table-reservation flow.
///
/// The dialogue owns its stage and the attempt being filled in. The
/// caller owns the session and catalog and passes them to each turn.
#[derive(Debug, Clone)]
pub struct BookingDialogue {
    stage: BookingStage,
    attempt: BookingAttempt,
}

impl BookingDialogue {
    /// Opens a dialogue for the given session and returns the opening
    /// reply lines.
    ///
    /// A session with a stored name skips the name stage entirely.
    pub fn open(session: &Session) -> (Self, Vec<String>) {
        let (stage, lines) = match session.user_name() {
            Some(name) => (
                BookingStage::AskRestaurant,
                vec![format!(
                    "Dear {}, Welcome to the restaurant booking service! \
                     Which restaurant would you like to book?",
                    name
                )],
            ),
            None => (
                BookingStage::AskName,
                vec!["Before we proceed, may I know your name?".to_string()],
            ),
        };
        debug!(stage = stage.label(), "booking dialogue opened");
        (
            Self {
                stage,
                attempt: BookingAttempt::new(),
            },
            lines,
        )
    }

    /// Returns the current stage.
    pub fn stage(&self) -> BookingStage {
        self.stage
    }

    /// Returns the attempt being filled in.
    pub fn attempt(&self) -> &BookingAttempt {
        &self.attempt
    }

    /// Returns true once the dialogue has finished.
    pub fn is_closed(&self) -> bool {
        self.stage.is_closed()
    }

    /// Consumes one user utterance and returns the reply lines.
    ///
    /// # Errors
    ///
    /// - `DialogueClosed` if called after the dialogue finished
    /// - `InternalError` if a stage runs without the details earlier
    ///   stages are required to have collected
    pub fn advance(
        &mut self,
        session: &mut Session,
        catalog: &RestaurantCatalog,
        input: &str,
    ) -> Result<Vec<String>, DomainError> {
        let (target, lines) = match self.stage {
            BookingStage::AskName => self.handle_ask_name(session, input),
            BookingStage::AskRestaurant => self.handle_ask_restaurant(catalog, input),
            BookingStage::AskDateTime => self.handle_ask_date_time(input),
            BookingStage::ConfirmSlot => self.handle_confirm_slot(input),
            BookingStage::ChooseSlot => self.handle_choose_slot(input),
            BookingStage::AskPartySize => self.handle_ask_party_size(input),
            BookingStage::ConfirmDetails => self.handle_confirm_details(input),
            BookingStage::Closed => {
                return Err(DomainError::new(
                    ErrorCode::DialogueClosed,
                    "The booking dialogue has already finished",
                ))
            }
        }?;

        let from = self.stage;
        self.stage = self.stage.transition_to(target)?;
        debug!(
            from = from.label(),
            to = self.stage.label(),
            "booking stage advanced"
        );

        if self.attempt.status() == BookingStatus::Confirmed {
            if let Some(restaurant) = self.attempt.restaurant() {
                info!(restaurant = restaurant.name(), "booking confirmed");
            }
        }

        Ok(lines)
    }

    fn handle_ask_name(
        &mut self,
        session: &mut Session,
        input: &str,
    ) -> Result<(BookingStage, Vec<String>), DomainError> {
        let lines = match extraction::extract_name(input) {
            Some(name) => {
                let line = format!(
                    "Nice to meet you, {}! Welcome to the restaurant booking service! \
                     Which restaurant would you like to book?",
                    name
                );
                session.set_user_name(name);
                vec![line]
            }
            None => vec![
                format!(
                    "I'll call you {} for now, but feel free to share your name later.",
                    GUEST_NAME
                ),
                "Welcome to the restaurant booking service! \
                 Which restaurant would you like to book?"
                    .to_string(),
            ],
        };
        Ok((BookingStage::AskRestaurant, lines))
    }

    fn handle_ask_restaurant(
        &mut self,
        catalog: &RestaurantCatalog,
        input: &str,
    ) -> Result<(BookingStage, Vec<String>), DomainError> {
        match catalog.find(input) {
            Some(restaurant) => {
                let line = format!(
                    "Great! {} is available. Please enter the date and time \
                     in 'dd-mm-yyyy hh:mm am/pm' format.",
                    restaurant.name()
                );
                self.attempt.set_restaurant(restaurant.clone());
                Ok((BookingStage::AskDateTime, vec![line]))
            }
            None => {
                self.attempt.mark_not_found();
                Ok((
                    BookingStage::Closed,
                    vec!["Sorry, I couldn't find that restaurant.".to_string()],
                ))
            }
        }
    }

    fn handle_ask_date_time(
        &mut self,
        input: &str,
    ) -> Result<(BookingStage, Vec<String>), DomainError> {
        let Some(date_time) = extraction::validate_date_time(input) else {
            return Ok((
                BookingStage::AskDateTime,
                vec![
                    "Invalid date/time format. Please enter in 'dd-mm-yyyy, hh:mm am/pm' format."
                        .to_string(),
                ],
            ));
        };

        let restaurant = self.require_restaurant()?.clone();
        let time = date_time.time.to_lowercase();
        self.attempt.set_schedule(date_time.date.clone(), &time);

        if restaurant.has_time(&time) {
            let line = format!(
                "{} is available for your selected time. Would you like to proceed?",
                restaurant.name()
            );
            Ok((BookingStage::ConfirmSlot, vec![line]))
        } else {
            let mut lines = vec![format!(
                "Your requested time is unavailable. Available slots for {} are:",
                date_time.date
            )];
            for slot in restaurant.available_times() {
                lines.push(format!("- {}", slot));
            }
            lines.push(
                "Would you like to book one of these slots? If yes, \
                 please specify the time (e.g., 12:00 PM)."
                    .to_string(),
            );
            Ok((BookingStage::ChooseSlot, lines))
        }
    }

    fn handle_confirm_slot(
        &mut self,
        input: &str,
    ) -> Result<(BookingStage, Vec<String>), DomainError> {
        if is_yes(input) {
            Ok((
                BookingStage::AskPartySize,
                vec!["How many people will be attending?".to_string()],
            ))
        } else {
            // Anything short of a yes cancels, including an unclear answer.
            self.attempt.cancel();
            Ok((
                BookingStage::Closed,
                vec!["Booking cancelled.".to_string()],
            ))
        }
    }

    fn handle_choose_slot(
        &mut self,
        input: &str,
    ) -> Result<(BookingStage, Vec<String>), DomainError> {
        let restaurant = self.require_restaurant()?.clone();
        match restaurant.canonical_time(input) {
            Some(slot) => {
                self.attempt.choose_time(slot);
                Ok((
                    BookingStage::AskPartySize,
                    vec!["How many people will be attending?".to_string()],
                ))
            }
            None => {
                self.attempt.cancel();
                Ok((
                    BookingStage::Closed,
                    vec!["Booking cancelled, Thank you.".to_string()],
                ))
            }
        }
    }

    fn handle_ask_party_size(
        &mut self,
        input: &str,
    ) -> Result<(BookingStage, Vec<String>), DomainError> {
        self.attempt.set_party_size(input);
        let line = format!(
            "Your booking at {} is for {} on {} for {} people. \
             Do you confirm this booking? (yes/no)",
            self.require_restaurant()?.name(),
            required(self.attempt.effective_time(), "time")?,
            required(self.attempt.requested_date(), "date")?,
            required(self.attempt.party_size(), "party_size")?,
        );
        Ok((BookingStage::ConfirmDetails, vec![line]))
    }

    fn handle_confirm_details(
        &mut self,
        input: &str,
    ) -> Result<(BookingStage, Vec<String>), DomainError> {
        if is_yes(input) {
            let line = format!(
                "Your booking at {} is confirmed for {} on {} for {} people.",
                self.require_restaurant()?.name(),
                required(self.attempt.effective_time(), "time")?,
                required(self.attempt.requested_date(), "date")?,
                required(self.attempt.party_size(), "party_size")?,
            );
            self.attempt.confirm();
            Ok((BookingStage::Closed, vec![line]))
        } else {
            self.attempt.cancel();
            Ok((
                BookingStage::Closed,
                vec!["Booking cancelled.".to_string()],
            ))
        }
    }

    fn require_restaurant(&self) -> Result<&Restaurant, DomainError> {
        self.attempt.restaurant().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                "Booking detail 'restaurant' is missing at this stage",
            )
            .with_detail("field", "restaurant")
        })
    }
}

fn is_yes(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "yes" | "y")
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, DomainError> {
    value.ok_or_else(|| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Booking detail '{}' is missing at this stage", field),
        )
        .with_detail("field", field)
    })
}
