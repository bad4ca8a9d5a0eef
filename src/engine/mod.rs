//! The query/filter engine: session state plus its derived projection.
//!
//! [`Engine`] owns the catalog snapshot, the favourites set, the filter set,
//! the free-text query and the type index, and keeps the visible projection
//! consistent with them.
//!
//! # Recompute contract
//!
//! Every mutator re-derives the projection before it returns, so a reader
//! never observes a projection computed from stale inputs. Changes that
//! belong together go through [`Engine::batch`], which applies all of them
//! and re-derives exactly once with the final combined state.
//!
//! ```
//! use pokedexer::catalog::Catalog;
//! use pokedexer::domain::Item;
//! use pokedexer::engine::{Engine, Filter};
//!
//! let catalog: Catalog = [("bulbasaur", 1), ("charmander", 4)]
//!     .into_iter()
//!     .map(|(name, id)| Item::from_resource(name, &format!("https://pokeapi.co/api/v2/pokemon/{id}/")))
//!     .collect::<Result<_, _>>()?;
//!
//! let mut engine = Engine::with_catalog(catalog);
//! engine.add_favourite("bulbasaur");
//! engine.set_filter(Filter::Favourite(true));
//!
//! let visible: Vec<&str> = engine.projection().unwrap_or_default().iter().map(|i| i.name.as_str()).collect();
//! assert_eq!(visible, ["bulbasaur"]);
//! # Ok::<(), pokedexer::domain::LoadError>(())
//! ```

pub mod filters;
pub mod query;
pub mod type_index;

pub use filters::{Favourites, Filter, FilterDimension, FilterSet};
pub use query::derive;
pub use type_index::TypeIndex;

use crate::catalog::Catalog;
use crate::domain::{Item, PokedexError, Result};

/// The mutable inputs of a derivation, handed out by [`Engine::batch`].
///
/// Only the engine's own operations are exposed: the type index can be
/// merged into but never replaced or shrunk.
#[derive(Debug, Clone, Default)]
pub struct EngineInputs {
    favourites: Favourites,
    filters: FilterSet,
    type_index: TypeIndex,
    query: String,
}

impl EngineInputs {
    pub fn set_filter(&mut self, filter: Filter) {
        tracing::trace!(dimension = ?filter.dimension(), "setting filter");
        self.filters.set(filter);
    }

    pub fn clear_filter(&mut self, dimension: FilterDimension) {
        self.filters.clear(dimension);
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Returns `false` if `name` already was a favourite.
    pub fn add_favourite(&mut self, name: &str) -> bool {
        self.favourites.add(name)
    }

    /// Returns `false` if `name` was not a favourite.
    pub fn remove_favourite(&mut self, name: &str) -> bool {
        self.favourites.remove(name)
    }

    /// Merges type tags into the index (last write wins per name).
    pub fn populate_types<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        self.type_index.populate(entries);
    }
}

/// Session state with an always-consistent projection.
///
/// Engines are plain values: any number can coexist, nothing is global.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    catalog: Option<Catalog>,
    inputs: EngineInputs,
    /// `None` until a catalog is installed.
    projection: Option<Vec<Item>>,
    derivations: u64,
}

impl Engine {
    /// Creates an engine with no catalog; the projection stays absent until
    /// [`Engine::install_catalog`] succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut engine = Self::new();
        engine.catalog = Some(catalog);
        engine.recompute();
        engine
    }

    /// Installs the loaded catalog and derives the first projection.
    ///
    /// Inputs set before the catalog arrived (favourites, filters, query,
    /// type tags) apply immediately.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::CatalogAlreadyInstalled`] if a catalog is
    /// already present. The catalog is never replaced.
    pub fn install_catalog(&mut self, catalog: Catalog) -> Result<()> {
        if let Some(existing) = &self.catalog {
            return Err(PokedexError::CatalogAlreadyInstalled {
                count: existing.len(),
            });
        }
        self.catalog = Some(catalog);
        self.recompute();
        Ok(())
    }

    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// The current visible items, sorted by identifier.
    #[must_use]
    pub fn projection(&self) -> Option<&[Item]> {
        self.projection.as_deref()
    }

    #[must_use]
    pub const fn favourites(&self) -> &Favourites {
        &self.inputs.favourites
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.inputs.filters
    }

    #[must_use]
    pub const fn type_index(&self) -> &TypeIndex {
        &self.inputs.type_index
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.inputs.query
    }

    /// Number of derivations run so far.
    #[must_use]
    pub const fn derivation_count(&self) -> u64 {
        self.derivations
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.batch(|inputs| inputs.set_filter(filter));
    }

    pub fn clear_filter(&mut self, dimension: FilterDimension) {
        self.batch(|inputs| inputs.clear_filter(dimension));
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.batch(|inputs| inputs.set_query(text));
    }

    /// Returns `false` if `name` already was a favourite.
    pub fn add_favourite(&mut self, name: &str) -> bool {
        self.batch(|inputs| inputs.add_favourite(name))
    }

    /// Returns `false` if `name` was not a favourite.
    pub fn remove_favourite(&mut self, name: &str) -> bool {
        self.batch(|inputs| inputs.remove_favourite(name))
    }

    /// Flips membership of `name`, returning whether it is now a favourite.
    pub fn toggle_favourite(&mut self, name: &str) -> bool {
        self.batch(|inputs| {
            if inputs.remove_favourite(name) {
                false
            } else {
                inputs.add_favourite(name)
            }
        })
    }

    /// Merges type tags into the index (last write wins per name).
    pub fn populate_types<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        self.batch(|inputs| inputs.populate_types(entries));
    }

    /// Applies several input changes, then re-derives once.
    ///
    /// ```
    /// use pokedexer::engine::{Engine, FilterDimension};
    ///
    /// let mut engine = Engine::new();
    /// engine.batch(|inputs| {
    ///     inputs.set_query("");
    ///     inputs.clear_filter(FilterDimension::Favourite);
    ///     inputs.clear_filter(FilterDimension::PokemonType);
    /// });
    /// ```
    pub fn batch<R>(&mut self, apply: impl FnOnce(&mut EngineInputs) -> R) -> R {
        let result = apply(&mut self.inputs);
        self.recompute();
        result
    }

    fn recompute(&mut self) {
        let Some(catalog) = &self.catalog else {
            tracing::trace!("no catalog installed, projection stays absent");
            return;
        };

        let _span = tracing::debug_span!(
            "derive_projection",
            catalog_size = catalog.len(),
            favourite = ?self.inputs.filters.favourite,
            types = ?self.inputs.filters.pokemon_type,
            query_len = self.inputs.query.len()
        )
        .entered();

        let projection = derive(
            catalog.items(),
            &self.inputs.favourites,
            &self.inputs.type_index,
            &self.inputs.filters,
            &self.inputs.query,
        );

        tracing::debug!(visible = projection.len(), "projection derived");
        self.projection = Some(projection);
        self.derivations += 1;
    }
}
