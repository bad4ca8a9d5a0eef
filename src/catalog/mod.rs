//! Catalog loading: the immutable item snapshot and the one-shot fetch.
//!
//! - [`api`]: PokeAPI wire types, request URLs and response parsing
//! - [`loader`]: `Idle -> Loading -> Loaded | Errored` state machine

pub mod api;
pub mod loader;

pub use loader::{CatalogLoader, LoadState};

use std::sync::Arc;

use crate::domain::Item;

/// The full list of items, in the order the API returned them.
///
/// Immutable once built. Cloning is cheap (shared slice) so the engine and
/// tests can hold the same snapshot. The order here is not the display
/// order; the query engine always re-sorts by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    items: Arc<[Item]>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: items.into(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
