//! Chat engine - one conversation, one turn at a time.
//!
//! Orchestrates the session, the intent router, and the booking
//! dialogue. Outside a booking, each utterance goes to the router;
//! once a booking starts, every utterance feeds the dialogue until it
//! closes.

use std::sync::Arc;

use tracing::debug;

use crate::domain::booking::BookingDialogue;
use crate::domain::catalog::RestaurantCatalog;
use crate::domain::corpus::CorpusIndex;
use crate::domain::foundation::DomainError;
use crate::domain::routing::{IntentRouter, RouterConfig, RouterOutcome};
use crate::domain::session::Session;

/// Remark appended after a booking dialogue finishes, whatever its
/// outcome.
const CLOSING_REMARK: &str = "Let me know if there's anything else I can help with!";

/// Turn-based conversation engine for a single session.
pub struct ChatEngine {
    router: IntentRouter,
    catalog: RestaurantCatalog,
    session: Session,
    dialogue: Option<BookingDialogue>,
}

impl ChatEngine {
    /// Creates an engine with a fresh session.
    pub fn new(index: Arc<CorpusIndex>, catalog: RestaurantCatalog) -> Self {
        Self {
            router: IntentRouter::new(index, RouterConfig::default()),
            catalog,
            session: Session::new(),
            dialogue: None,
        }
    }

    /// Returns the session carried across turns.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns true while a booking dialogue is consuming the input.
    pub fn in_booking(&self) -> bool {
        self.dialogue.is_some()
    }

    /// Consumes one utterance and returns the reply lines for the turn.
    ///
    /// # Errors
    ///
    /// Propagates `DomainError` from the booking dialogue; with the
    /// engine dropping finished dialogues these indicate a bug, not bad
    /// user input.
    pub fn handle_turn(&mut self, input: &str) -> Result<Vec<String>, DomainError> {
        if let Some(dialogue) = self.dialogue.as_mut() {
            let mut lines = dialogue.advance(&mut self.session, &self.catalog, input)?;
            if dialogue.is_closed() {
                debug!(
                    status = dialogue.attempt().status().label(),
                    "booking dialogue finished"
                );
                self.dialogue = None;
                lines.push(CLOSING_REMARK.to_string());
            }
            return Ok(lines);
        }

        match self.router.classify_and_respond(&mut self.session, input) {
            RouterOutcome::Reply(text) => Ok(vec![text]),
            RouterOutcome::StartBooking => {
                let (dialogue, lines) = BookingDialogue::open(&self.session);
                self.dialogue = Some(dialogue);
                Ok(lines)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Restaurant;
    use crate::domain::corpus::{CorpusEntry, CorpusSource};

    fn entry(question: &str, answer: &str, source: CorpusSource) -> CorpusEntry {
        CorpusEntry::new(question, answer, source).unwrap()
    }

    fn engine() -> ChatEngine {
        let index = CorpusIndex::from_datasets(
            vec![
                entry(
                    "hello",
                    "Hi there! How can I help you today?",
                    CorpusSource::SmallTalk,
                ),
                entry(
                    "what is your name",
                    "I'm TableTalk, the booking assistant.",
                    CorpusSource::SmallTalk,
                ),
            ],
            vec![entry(
                "what are your opening hours",
                "We are open from 11 am to 10 pm.",
                CorpusSource::Faq,
            )],
        )
        .unwrap();
        let catalog = RestaurantCatalog::new(vec![Restaurant::new(
            "The Green Table",
            vec![
                "12:00 PM".to_string(),
                "1:00 PM".to_string(),
                "7:00 PM".to_string(),
            ],
        )
        .unwrap()]);
        ChatEngine::new(Arc::new(index), catalog)
    }

    #[test]
    fn routes_plain_turns_directly() {
        let mut engine = engine();
        let lines = engine.handle_turn("hello").unwrap();
        assert_eq!(lines, vec!["Hi there! How can I help you today?"]);
        assert!(!engine.in_booking());
    }

    #[test]
    fn booking_request_opens_the_dialogue() {
        let mut engine = engine();
        engine.handle_turn("my name is Alice").unwrap();

        let lines = engine.handle_turn("book a table").unwrap();

        assert!(engine.in_booking());
        assert_eq!(
            lines,
            vec![
                "Dear Alice, Welcome to the restaurant booking service! \
                 Which restaurant would you like to book?"
            ]
        );
    }

    #[test]
    fn dialogue_turns_bypass_the_router_until_closed() {
        let mut engine = engine();
        engine.handle_turn("my name is Alice").unwrap();
        engine.handle_turn("book a table").unwrap();

        // "hello" would normally route as a greeting; inside a booking
        // it is a restaurant lookup and fails to match the catalog.
        let lines = engine.handle_turn("hello").unwrap();
        assert_eq!(
            lines,
            vec![
                "Sorry, I couldn't find that restaurant.".to_string(),
                CLOSING_REMARK.to_string(),
            ]
        );
        assert!(!engine.in_booking());
    }

    #[test]
    fn finished_booking_appends_the_closing_remark() {
        let mut engine = engine();
        engine.handle_turn("my name is Alice").unwrap();
        engine.handle_turn("book a table").unwrap();
        engine.handle_turn("the green table").unwrap();
        engine.handle_turn("25-12-2025 7:00 pm").unwrap();
        engine.handle_turn("yes").unwrap();
        engine.handle_turn("4").unwrap();

        let lines = engine.handle_turn("yes").unwrap();

        assert_eq!(
            lines,
            vec![
                "Your booking at The Green Table is confirmed for 7:00 pm \
                 on 25-12-2025 for 4 people."
                    .to_string(),
                CLOSING_REMARK.to_string(),
            ]
        );
        assert!(!engine.in_booking());
    }

    #[test]
    fn name_captured_inside_a_booking_is_remembered_after_it() {
        let mut engine = engine();
        engine.handle_turn("book a table").unwrap();
        engine.handle_turn("my name is Cara").unwrap();
        engine.handle_turn("the green table").unwrap();
        engine.handle_turn("25-12-2025 7:00 pm").unwrap();
        engine.handle_turn("no").unwrap();

        let lines = engine.handle_turn("what is my name?").unwrap();
        assert_eq!(lines, vec!["Your name is Cara. How can I assist you today?"]);
    }
}
