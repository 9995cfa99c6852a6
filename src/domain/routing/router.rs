//! Priority-ordered intent routing.
//!
//! The router resolves each utterance against a fixed rule order:
//! greeting, name statement, name query, booking request, capability
//! query, then the general corpus fallback. The first rule that produces
//! an outcome wins.

use std::sync::Arc;

use tracing::debug;

use crate::domain::corpus::{CorpusIndex, CorpusSource, SparseVector};
use crate::domain::extraction;
use crate::domain::session::Session;

use super::intent::Intent;

/// Cosine similarity an utterance must exceed to count as a name query.
const NAME_QUERY_THRESHOLD: f64 = 0.5;

/// Confidence a corpus match must exceed to be served as an answer.
const FAQ_CONFIDENCE_THRESHOLD: f64 = 0.1;

/// Phrase sets the router tests utterances against.
///
/// Phrases are matched as substrings of the lowercased utterance, so
/// they must be stored lowercase.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Salutations that gate the small-talk scan.
    pub greeting_phrases: Vec<String>,
    /// Requests that hand control to the booking dialogue.
    pub booking_phrases: Vec<String>,
    /// Questions about what the assistant can do.
    pub capability_phrases: Vec<String>,
    /// Canonical phrasings of "what is my name".
    pub name_query_phrases: Vec<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            greeting_phrases: vec![
                "hi".to_string(),
                "hello".to_string(),
                "hey".to_string(),
                "how are you".to_string(),
                "good morning".to_string(),
                "good evening".to_string(),
                "good afternoon".to_string(),
            ],
            booking_phrases: vec![
                "book a restaurant".to_string(),
                "book restaurant".to_string(),
                "restaurant booking".to_string(),
                "book a table".to_string(),
                "reserve a table".to_string(),
                "make a restaurant reservation".to_string(),
                "book me a table".to_string(),
                "table reservation".to_string(),
                "restaurant reservation".to_string(),
                "book table".to_string(),
            ],
            capability_phrases: vec![
                "what can you do for me".to_string(),
                "how can you help me".to_string(),
                "what services do you provide?".to_string(),
            ],
            name_query_phrases: vec![
                "what is my name?".to_string(),
                "who am i".to_string(),
                "what's my name?".to_string(),
                "who am i?".to_string(),
            ],
        }
    }
}

/// Outcome of routing one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterOutcome {
    /// A direct textual reply.
    Reply(String),
    /// The utterance asks for a table; control passes to the booking
    /// dialogue.
    StartBooking,
}

/// Resolves utterances to replies or a booking delegation.
pub struct IntentRouter {
    config: RouterConfig,
    index: Arc<CorpusIndex>,
    name_query_vectors: Vec<SparseVector>,
}

impl IntentRouter {
    /// Creates a router over a fitted corpus index.
    ///
    /// The name-query reference vectors are computed once here, in the
    /// index's fitted space, so later lookups are comparable.
    pub fn new(index: Arc<CorpusIndex>, config: RouterConfig) -> Self {
        let name_query_vectors = config
            .name_query_phrases
            .iter()
            .map(|phrase| index.vectorize(phrase))
            .collect();
        Self {
            config,
            index,
            name_query_vectors,
        }
    }

    /// Classifies one utterance and produces its outcome.
    ///
    /// A recognized name statement stores the name in the session before
    /// replying. Every branch yields a definite outcome.
    pub fn classify_and_respond(&self, session: &mut Session, utterance: &str) -> RouterOutcome {
        let lowered = utterance.to_lowercase();

        if contains_any(&lowered, &self.config.greeting_phrases) {
            if let Some(answer) = self.small_talk_answer(&lowered) {
                debug!(intent = Intent::Greeting.label(), "utterance routed");
                return RouterOutcome::Reply(answer);
            }
            // Greeting phrase present but no small-talk row shares a
            // token with the utterance: fall through to later rules.
        }

        if let Some(name) = extraction::extract_name(utterance) {
            debug!(intent = Intent::NameStatement.label(), "utterance routed");
            let reply = format!("Nice to meet you, {}! How can I assist you today?", name);
            session.set_user_name(name);
            return RouterOutcome::Reply(reply);
        }

        if self.is_name_query(utterance) {
            debug!(intent = Intent::NameQuery.label(), "utterance routed");
            let reply = match session.user_name() {
                Some(name) => format!("Your name is {}. How can I assist you today?", name),
                None => "I don't know your name yet. Can you tell me?".to_string(),
            };
            return RouterOutcome::Reply(reply);
        }

        if contains_any(&lowered, &self.config.booking_phrases) {
            debug!(intent = Intent::BookingRequest.label(), "utterance routed");
            return RouterOutcome::StartBooking;
        }

        if contains_any(&lowered, &self.config.capability_phrases) {
            debug!(intent = Intent::CapabilityQuery.label(), "utterance routed");
            return RouterOutcome::Reply(
                "I can assist you with restaurant booking, answering questions, \
                 and having casual conversations."
                    .to_string(),
            );
        }

        let matched = self.index.best_match(utterance);
        debug!(
            intent = Intent::FaqFallback.label(),
            confidence = matched.confidence,
            "utterance routed"
        );
        if matched.confidence > FAQ_CONFIDENCE_THRESHOLD {
            RouterOutcome::Reply(self.index.entries()[matched.index].answer().to_string())
        } else {
            RouterOutcome::Reply("I'm sorry, I didn't understand that. Can you rephrase?".to_string())
        }
    }

    /// Answer of the first small-talk entry any of whose question tokens
    /// occurs in the lowercased utterance, scanned in corpus order.
    fn small_talk_answer(&self, lowered: &str) -> Option<String> {
        self.index
            .entries_from(CorpusSource::SmallTalk)
            .find_map(|entry| {
                let question = entry.question().to_lowercase();
                let shares_token = question
                    .split_whitespace()
                    .any(|token| lowered.contains(token));
                shares_token.then(|| entry.answer().to_string())
            })
    }

    fn is_name_query(&self, utterance: &str) -> bool {
        let query = self.index.vectorize(utterance);
        self.name_query_vectors
            .iter()
            .any(|vector| query.cosine_similarity(vector) > NAME_QUERY_THRESHOLD)
    }
}

fn contains_any(lowered: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|phrase| lowered.contains(phrase.as_str()))
}
