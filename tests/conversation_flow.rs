//! Integration tests for the conversation flow.
//!
//! These tests verify the end-to-end path:
//! 1. Dataset stores load the corpora and the restaurant catalog
//! 2. The corpus index and catalog are built from them
//! 3. The chat engine routes free-form turns or delegates to the
//!    booking dialogue
//! 4. Session state carries across turns and across bookings
//!
//! Most flows run over an in-memory store; one test loads the YAML
//! datasets shipped under data/ through the file adapter.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use tabletalk::adapters::YamlDataStore;
use tabletalk::application::ChatEngine;
use tabletalk::domain::catalog::{Restaurant, RestaurantCatalog};
use tabletalk::domain::corpus::{CorpusEntry, CorpusIndex, CorpusSource};
use tabletalk::ports::{CatalogStore, CorpusStore, DatasetError};

const CLOSING_REMARK: &str = "Let me know if there's anything else I can help with!";

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory dataset store seeded with a compact corpus and catalog.
struct InMemoryDataStore {
    small_talk: Vec<CorpusEntry>,
    faq: Vec<CorpusEntry>,
    restaurants: Vec<Restaurant>,
}

impl InMemoryDataStore {
    fn seeded() -> Self {
        Self {
            small_talk: vec![
                qna(
                    "hi, how are you",
                    "Hello! I am doing great, how about you?",
                    CorpusSource::SmallTalk,
                ),
                qna("hello", "Hi there! How can I help you today?", CorpusSource::SmallTalk),
                qna(
                    "what is your name",
                    "I'm TableTalk, the booking assistant.",
                    CorpusSource::SmallTalk,
                ),
            ],
            faq: vec![
                qna(
                    "what are your opening hours",
                    "We are open from 11 am to 10 pm.",
                    CorpusSource::Faq,
                ),
                qna(
                    "do you have vegetarian options",
                    "Yes, we have many vegetarian dishes.",
                    CorpusSource::Faq,
                ),
                qna(
                    "can you help me with parking",
                    "There is free parking next door.",
                    CorpusSource::Faq,
                ),
            ],
            restaurants: vec![
                restaurant("The Green Table", &["12:00 PM", "1:00 PM", "7:00 PM"]),
                restaurant("Bistro Nova", &["6:00 PM", "8:00 PM"]),
            ],
        }
    }
}

#[async_trait]
impl CorpusStore for InMemoryDataStore {
    async fn load_small_talk(&self) -> Result<Vec<CorpusEntry>, DatasetError> {
        Ok(self.small_talk.clone())
    }

    async fn load_faq(&self) -> Result<Vec<CorpusEntry>, DatasetError> {
        Ok(self.faq.clone())
    }
}

#[async_trait]
impl CatalogStore for InMemoryDataStore {
    async fn load_restaurants(&self) -> Result<Vec<Restaurant>, DatasetError> {
        Ok(self.restaurants.clone())
    }
}

fn qna(question: &str, answer: &str, source: CorpusSource) -> CorpusEntry {
    CorpusEntry::new(question, answer, source).unwrap()
}

fn restaurant(name: &str, times: &[&str]) -> Restaurant {
    Restaurant::new(name, times.iter().map(|t| t.to_string()).collect()).unwrap()
}

/// Wires a chat engine from a pair of stores, the way the binary does.
async fn engine_from(store: &(impl CorpusStore + CatalogStore)) -> ChatEngine {
    let small_talk = store.load_small_talk().await.unwrap();
    let faq = store.load_faq().await.unwrap();
    let restaurants = store.load_restaurants().await.unwrap();
    let index = CorpusIndex::from_datasets(small_talk, faq).unwrap();
    ChatEngine::new(Arc::new(index), RestaurantCatalog::new(restaurants))
}

fn turn(engine: &mut ChatEngine, input: &str) -> Vec<String> {
    engine.handle_turn(input).unwrap()
}

// =============================================================================
// Integration Tests
// =============================================================================

/// Tests that plain conversational turns are answered from the corpus
#[tokio::test]
async fn greeting_and_faq_turns_are_answered_from_the_corpus() {
    let store = InMemoryDataStore::seeded();
    let mut engine = engine_from(&store).await;

    assert_eq!(
        turn(&mut engine, "hi, how are you"),
        vec!["Hello! I am doing great, how about you?"]
    );
    assert_eq!(
        turn(&mut engine, "do you have vegetarian options"),
        vec!["Yes, we have many vegetarian dishes."]
    );
}

/// Tests the full happy-path booking transcript, turn by turn
#[tokio::test]
async fn booking_happy_path_end_to_end() {
    let store = InMemoryDataStore::seeded();
    let mut engine = engine_from(&store).await;

    assert_eq!(
        turn(&mut engine, "I want to book a table"),
        vec!["Before we proceed, may I know your name?"]
    );
    assert!(engine.in_booking());

    assert_eq!(
        turn(&mut engine, "my name is Dana"),
        vec![
            "Nice to meet you, Dana! Welcome to the restaurant booking service! \
             Which restaurant would you like to book?"
        ]
    );
    assert_eq!(
        turn(&mut engine, "green table"),
        vec![
            "Great! The Green Table is available. Please enter the date and time \
             in 'dd-mm-yyyy hh:mm am/pm' format."
        ]
    );
    assert_eq!(
        turn(&mut engine, "25-12-2025 7:00 PM"),
        vec![
            "The Green Table is available for your selected time. \
             Would you like to proceed?"
        ]
    );
    assert_eq!(
        turn(&mut engine, "yes"),
        vec!["How many people will be attending?"]
    );
    assert_eq!(
        turn(&mut engine, "4"),
        vec![
            "Your booking at The Green Table is for 7:00 pm on 25-12-2025 \
             for 4 people. Do you confirm this booking? (yes/no)"
        ]
    );
    assert_eq!(
        turn(&mut engine, "yes"),
        vec![
            "Your booking at The Green Table is confirmed for 7:00 pm \
             on 25-12-2025 for 4 people."
                .to_string(),
            CLOSING_REMARK.to_string(),
        ]
    );

    assert!(!engine.in_booking());
    assert_eq!(engine.session().user_name(), Some("Dana"));
}

/// Tests that an unavailable time lists the open slots and books the
/// picked one under the catalog's spelling
#[tokio::test]
async fn unavailable_time_substitutes_a_listed_slot() {
    let store = InMemoryDataStore::seeded();
    let mut engine = engine_from(&store).await;

    turn(&mut engine, "book a table");
    turn(&mut engine, "my name is Ben");
    turn(&mut engine, "bistro nova");

    assert_eq!(
        turn(&mut engine, "01-01-2026 5:00 pm"),
        vec![
            "Your requested time is unavailable. Available slots for 01-01-2026 are:".to_string(),
            "- 6:00 PM".to_string(),
            "- 8:00 PM".to_string(),
            "Would you like to book one of these slots? If yes, \
             please specify the time (e.g., 12:00 PM)."
                .to_string(),
        ]
    );

    assert_eq!(
        turn(&mut engine, "6:00 pm"),
        vec!["How many people will be attending?"]
    );
    assert_eq!(
        turn(&mut engine, "2"),
        vec![
            "Your booking at Bistro Nova is for 6:00 PM on 01-01-2026 \
             for 2 people. Do you confirm this booking? (yes/no)"
        ]
    );
    assert_eq!(
        turn(&mut engine, "y"),
        vec![
            "Your booking at Bistro Nova is confirmed for 6:00 PM \
             on 01-01-2026 for 2 people."
                .to_string(),
            CLOSING_REMARK.to_string(),
        ]
    );
}

/// Tests that an unknown restaurant ends the dialogue and a later
/// booking reopens with the remembered name
#[tokio::test]
async fn unknown_restaurant_ends_the_dialogue() {
    let store = InMemoryDataStore::seeded();
    let mut engine = engine_from(&store).await;

    turn(&mut engine, "book a table");
    turn(&mut engine, "my name is Ana");

    assert_eq!(
        turn(&mut engine, "mcdonalds"),
        vec![
            "Sorry, I couldn't find that restaurant.".to_string(),
            CLOSING_REMARK.to_string(),
        ]
    );
    assert!(!engine.in_booking());

    // The name survives the failed attempt, so the next booking skips
    // the name stage.
    assert_eq!(
        turn(&mut engine, "book a table"),
        vec![
            "Dear Ana, Welcome to the restaurant booking service! \
             Which restaurant would you like to book?"
        ]
    );
    assert!(engine.in_booking());
}

/// Tests cancelling at the slot confirmation
#[tokio::test]
async fn declining_the_confirmation_cancels_the_booking() {
    let store = InMemoryDataStore::seeded();
    let mut engine = engine_from(&store).await;

    turn(&mut engine, "book a table");
    turn(&mut engine, "my name is Cleo");
    turn(&mut engine, "green table");
    turn(&mut engine, "25-12-2025 7:00 pm");

    assert_eq!(
        turn(&mut engine, "no"),
        vec!["Booking cancelled.".to_string(), CLOSING_REMARK.to_string()]
    );
    assert!(!engine.in_booking());
}

/// Tests that a stated name answers a later name query
#[tokio::test]
async fn name_is_remembered_across_turns() {
    let store = InMemoryDataStore::seeded();
    let mut engine = engine_from(&store).await;

    assert_eq!(
        turn(&mut engine, "my name is Elena"),
        vec!["Nice to meet you, Elena! How can I assist you today?"]
    );
    assert_eq!(
        turn(&mut engine, "what is my name?"),
        vec!["Your name is Elena. How can I assist you today?"]
    );
}

/// Tests that the YAML datasets shipped under data/ wire into a
/// working engine through the file adapter
#[tokio::test]
async fn shipped_datasets_build_a_working_engine() {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let store = YamlDataStore::new(&data_dir, "smalltalk.yaml", "faq.yaml", "restaurants.yaml");
    let mut engine = engine_from(&store).await;

    assert_eq!(
        turn(&mut engine, "hello"),
        vec!["Hi there! How can I help you today?"]
    );
    assert_eq!(
        turn(&mut engine, "what are your opening hours"),
        vec!["We are open every day from 11:00 AM to 10:00 PM."]
    );
    assert_eq!(
        turn(&mut engine, "book a table"),
        vec!["Before we proceed, may I know your name?"]
    );
    assert!(engine.in_booking());
}
