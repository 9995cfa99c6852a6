//! Session aggregate entity.
//!
//! A session is the per-user conversational context. It carries the
//! user's name once one has been extracted from an utterance, so later
//! turns (name queries, booking greetings) can personalize replies.

use crate::domain::foundation::{SessionId, Timestamp};
use serde::{Deserialize, Serialize};

/// Placeholder used in replies when no name has been captured yet.
pub const GUEST_NAME: &str = "Guest";

/// Conversational session state.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `user_name`, once set, is a non-empty extracted name; it is never
///   set to the guest placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// Name captured from the user, if any.
    user_name: Option<String>,

    /// When the session started.
    started_at: Timestamp,
}

impl Session {
    /// Create a new anonymous session.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            user_name: None,
            started_at: Timestamp::now(),
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the captured user name, if any.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Returns when the session started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Whether a user name has been captured.
    pub fn has_name(&self) -> bool {
        self.user_name.is_some()
    }

    /// Returns the captured name, or the guest placeholder.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(GUEST_NAME)
    }

    /// Store the user's name. A later capture overwrites an earlier one.
    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.user_name = Some(name.into());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
