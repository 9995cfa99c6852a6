//! Catalog module - bookable restaurants and approximate name lookup.
//!
//! - `restaurant` - Venue value objects and the in-memory catalog
//! - `fuzzy` - Ratcliff/Obershelp matching with a fixed cutoff

pub mod fuzzy;
mod restaurant;

pub use restaurant::{Restaurant, RestaurantCatalog};
