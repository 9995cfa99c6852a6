//! Restaurant catalog - the bookable venues and their time slots.
//!
//! Loaded once at startup and read-only for the life of the session.
//! Lookup goes through fuzzy name matching so users can type a rough
//! version of a venue's name.

use tracing::debug;

use crate::domain::foundation::ValidationError;

use super::fuzzy;

/// One bookable restaurant with its available time slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    name: String,
    available_times: Vec<String>,
}

impl Restaurant {
    /// Creates a restaurant.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is empty or whitespace-only
    pub fn new(
        name: impl Into<String>,
        available_times: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            name,
            available_times,
        })
    }

    /// Returns the restaurant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the available time slots in catalog order.
    pub fn available_times(&self) -> &[String] {
        &self.available_times
    }

    /// Returns true if the given time matches one of the slots,
    /// ignoring case.
    pub fn has_time(&self, time: &str) -> bool {
        self.canonical_time(time).is_some()
    }

    /// Resolves a user-typed time to the catalog's spelling of the slot.
    ///
    /// Comparison ignores case; the returned text is the slot exactly as
    /// the catalog lists it.
    pub fn canonical_time(&self, time: &str) -> Option<&str> {
        self.available_times
            .iter()
            .find(|slot| slot.eq_ignore_ascii_case(time))
            .map(|slot| slot.as_str())
    }
}

/// In-memory catalog of all bookable restaurants.
#[derive(Debug, Clone, Default)]
pub struct RestaurantCatalog {
    restaurants: Vec<Restaurant>,
}

impl RestaurantCatalog {
    /// Creates a catalog from a list of restaurants.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// Finds the restaurant whose name best matches the query.
    ///
    /// Uses fuzzy matching with a fixed cutoff, so "green table" finds
    /// "The Green Table". Returns `None` when nothing is close enough.
    pub fn find(&self, query: &str) -> Option<&Restaurant> {
        let names: Vec<&str> = self.restaurants.iter().map(|r| r.name()).collect();
        let matched = fuzzy::find_best(&names, query);

        match matched {
            Some(name) => {
                debug!(query, matched = name, "restaurant lookup");
                self.restaurants.iter().find(|r| r.name() == name)
            }
            None => {
                debug!(query, "restaurant lookup found nothing");
                None
            }
        }
    }

    /// Returns all restaurants in catalog order.
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Returns the number of restaurants in the catalog.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Returns true if the catalog holds no restaurants.
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str, times: &[&str]) -> Restaurant {
        Restaurant::new(name, times.iter().map(|t| t.to_string()).collect()).unwrap()
    }

    fn sample_catalog() -> RestaurantCatalog {
        RestaurantCatalog::new(vec![
            restaurant("The Green Table", &["12:00 PM", "7:00 PM"]),
            restaurant("Bistro Nova", &["1:00 PM", "8:00 PM"]),
        ])
    }

    mod construction {
        use super::*;

        #[test]
        fn empty_name_is_rejected() {
            assert!(Restaurant::new("", vec![]).is_err());
            assert!(Restaurant::new("   ", vec![]).is_err());
        }

        #[test]
        fn restaurant_exposes_name_and_times() {
            let r = restaurant("Bistro Nova", &["1:00 PM"]);
            assert_eq!(r.name(), "Bistro Nova");
            assert_eq!(r.available_times(), &["1:00 PM".to_string()]);
        }
    }

    mod time_slots {
        use super::*;

        #[test]
        fn has_time_ignores_case() {
            let r = restaurant("Bistro Nova", &["1:00 PM"]);
            assert!(r.has_time("1:00 pm"));
            assert!(r.has_time("1:00 PM"));
        }

        #[test]
        fn has_time_rejects_unlisted_slot() {
            let r = restaurant("Bistro Nova", &["1:00 PM"]);
            assert!(!r.has_time("2:00 pm"));
        }

        #[test]
        fn canonical_time_returns_catalog_spelling() {
            let r = restaurant("Bistro Nova", &["1:00 PM"]);
            assert_eq!(r.canonical_time("1:00 pm"), Some("1:00 PM"));
        }

        #[test]
        fn canonical_time_returns_none_for_unknown_slot() {
            let r = restaurant("Bistro Nova", &["1:00 PM"]);
            assert_eq!(r.canonical_time("9:00 pm"), None);
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn partial_name_finds_restaurant() {
            let catalog = sample_catalog();
            let found = catalog.find("green table").unwrap();
            assert_eq!(found.name(), "The Green Table");
        }

        #[test]
        fn misspelled_name_finds_restaurant() {
            let catalog = sample_catalog();
            let found = catalog.find("bistro nove").unwrap();
            assert_eq!(found.name(), "Bistro Nova");
        }

        #[test]
        fn unrelated_query_finds_nothing() {
            let catalog = sample_catalog();
            assert!(catalog.find("xyz").is_none());
        }

        #[test]
        fn empty_catalog_finds_nothing() {
            let catalog = RestaurantCatalog::default();
            assert!(catalog.is_empty());
            assert!(catalog.find("anything").is_none());
        }
    }
}
