//! Intent classification for user utterances.

use serde::{Deserialize, Serialize};

/// The categorical purpose inferred from one user utterance.
///
/// Exactly one intent is resolved per utterance, in the router's fixed
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// A salutation answered from the small-talk corpus.
    Greeting,
    /// The user stated their own name.
    NameStatement,
    /// The user asked what their name is.
    NameQuery,
    /// The user asked to book a table.
    BookingRequest,
    /// The user asked what the assistant can do.
    CapabilityQuery,
    /// Anything else, answered from the merged corpus or rejected.
    FaqFallback,
}

impl Intent {
    /// Human-readable label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::NameStatement => "name_statement",
            Intent::NameQuery => "name_query",
            Intent::BookingRequest => "booking_request",
            Intent::CapabilityQuery => "capability_query",
            Intent::FaqFallback => "faq_fallback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&Intent::BookingRequest).unwrap();
        assert_eq!(json, "\"booking_request\"");
    }

    #[test]
    fn deserializes_from_snake_case() {
        let intent: Intent = serde_json::from_str("\"name_query\"").unwrap();
        assert_eq!(intent, Intent::NameQuery);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(Intent::Greeting.label(), "greeting");
        assert_eq!(Intent::FaqFallback.label(), "faq_fallback");
    }
}
