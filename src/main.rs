//! TableTalk console assistant entrypoint.
//!
//! Loads configuration and the YAML datasets, builds the corpus index and
//! restaurant catalog, and hands the chat engine to the console adapter.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tabletalk::adapters::{ConsoleChat, YamlDataStore};
use tabletalk::application::ChatEngine;
use tabletalk::config::AppConfig;
use tabletalk::domain::catalog::RestaurantCatalog;
use tabletalk::domain::corpus::CorpusIndex;
use tabletalk::ports::{CatalogStore, CorpusStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    // Logs go to stderr so stdout stays clean for the conversation.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.runtime.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tabletalk starting");

    let store = YamlDataStore::new(
        &config.data.dir,
        &config.data.small_talk_file,
        &config.data.faq_file,
        &config.data.restaurants_file,
    );
    let small_talk = store.load_small_talk().await?;
    let faq = store.load_faq().await?;
    let restaurants = store.load_restaurants().await?;

    let index = CorpusIndex::from_datasets(small_talk, faq)?;
    let catalog = RestaurantCatalog::new(restaurants);
    tracing::info!(
        corpus_entries = index.len(),
        restaurants = catalog.len(),
        "datasets loaded"
    );

    let engine = ChatEngine::new(Arc::new(index), catalog);
    ConsoleChat::new(engine).run().await?;

    tracing::info!("tabletalk stopped");
    Ok(())
}
