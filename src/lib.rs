//! TableTalk - Conversational Restaurant Booking Assistant
//!
//! This crate implements an intent-routing chatbot that answers small talk
//! and FAQ questions via vector-space matching and drives a multi-turn
//! slot-filling dialogue for restaurant table reservations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
