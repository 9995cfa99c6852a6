//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `datasets` - Dataset stores (YAML files on disk)
//! - `console` - Terminal prompt/response loop

pub mod console;
pub mod datasets;

pub use console::ConsoleChat;
pub use datasets::YamlDataStore;
