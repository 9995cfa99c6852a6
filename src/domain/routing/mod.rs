//! Intent routing module.
//!
//! Classifies free-text utterances into intents and produces either a
//! direct reply or a delegation into the booking dialogue.

mod intent;
mod router;

pub use intent::Intent;
pub use router::{IntentRouter, RouterConfig, RouterOutcome};
