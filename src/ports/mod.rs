//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Dataset Ports
//!
//! - `CorpusStore` - Loads the small-talk and FAQ corpora
//! - `CatalogStore` - Loads the restaurant catalog

mod datasets;

pub use datasets::{CatalogStore, CorpusStore, DatasetError};
