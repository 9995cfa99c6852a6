//! Application layer - conversation orchestration.
//!
//! Coordinates the domain pieces into a turn-based chat: the router
//! decides what an utterance means, the booking dialogue consumes turns
//! while active, and the session carries state across both.

mod chat;

pub use chat::ChatEngine;
