//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `corpus` - Small-talk/FAQ corpus, TF-IDF vectorization, similarity lookup
//! - `extraction` - Regex-based name capture and date/time validation
//! - `catalog` - Restaurant catalog and fuzzy name matching
//! - `routing` - Intent classification over one utterance
//! - `booking` - Multi-turn slot-filling dialogue state machine
//! - `session` - Conversation context carried across turns

pub mod booking;
pub mod catalog;
pub mod corpus;
pub mod extraction;
pub mod foundation;
pub mod routing;
pub mod session;
