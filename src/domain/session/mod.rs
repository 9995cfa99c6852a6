//! Session domain module.
//!
//! A session tracks one user's conversational context: identity,
//! captured name, and start time. Sessions are created per connected
//! client and live for the duration of the chat.

mod aggregate;

pub use aggregate::{Session, GUEST_NAME};
