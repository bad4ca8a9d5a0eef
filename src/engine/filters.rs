//! Filter dimensions, their current values, and the favourites set.
//!
//! The set of dimensions is closed: [`FilterSet`] has one typed optional
//! field per dimension and [`Filter`] carries a value for exactly one of
//! them, so adding a dimension is a compile-time checked change.

use std::collections::BTreeSet;

/// A closed set of filter dimensions, used to clear a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    Favourite,
    PokemonType,
}

/// A value for one filter dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `true` keeps favourites only, `false` keeps non-favourites only.
    Favourite(bool),
    /// Keeps items sharing at least one tag with the list. An empty list is
    /// an active filter that matches nothing.
    PokemonType(Vec<String>),
}

impl Filter {
    #[must_use]
    pub const fn dimension(&self) -> FilterDimension {
        match self {
            Self::Favourite(_) => FilterDimension::Favourite,
            Self::PokemonType(_) => FilterDimension::PokemonType,
        }
    }
}

/// Current value of every filter dimension. `None` never constrains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub favourite: Option<bool>,
    pub pokemon_type: Option<Vec<String>>,
}

impl FilterSet {
    /// Replaces the value of the filter's dimension.
    pub fn set(&mut self, filter: Filter) {
        match filter {
            Filter::Favourite(value) => self.favourite = Some(value),
            Filter::PokemonType(types) => self.pokemon_type = Some(types),
        }
    }

    /// Removes a dimension from the active set.
    pub fn clear(&mut self, dimension: FilterDimension) {
        match dimension {
            FilterDimension::Favourite => self.favourite = None,
            FilterDimension::PokemonType => self.pokemon_type = None,
        }
    }

    #[must_use]
    pub const fn is_active(&self, dimension: FilterDimension) -> bool {
        match dimension {
            FilterDimension::Favourite => self.favourite.is_some(),
            FilterDimension::PokemonType => self.pokemon_type.is_some(),
        }
    }

    /// Whether no dimension constrains.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.favourite.is_none() && self.pokemon_type.is_none()
    }
}

/// Names the user marked as favourite. Membership only; order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favourites {
    names: BTreeSet<String>,
}

impl Favourites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name`. Returns `false` if it was already a favourite.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Removes `name`. Returns `false` if it was not a favourite.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_default_to_unset() {
        let filters = FilterSet::default();
        assert!(filters.is_empty());
        assert!(!filters.is_active(FilterDimension::Favourite));
        assert!(!filters.is_active(FilterDimension::PokemonType));
    }

    #[test]
    fn set_replaces_only_its_dimension() {
        let mut filters = FilterSet::default();
        filters.set(Filter::Favourite(true));
        filters.set(Filter::PokemonType(vec!["fire".to_string()]));
        filters.set(Filter::Favourite(false));

        assert_eq!(filters.favourite, Some(false));
        assert_eq!(filters.pokemon_type, Some(vec!["fire".to_string()]));
    }

    #[test]
    fn filter_values_name_their_dimension() {
        assert_eq!(Filter::Favourite(true).dimension(), FilterDimension::Favourite);
        assert_eq!(
            Filter::PokemonType(vec![]).dimension(),
            FilterDimension::PokemonType
        );
    }

    #[test]
    fn empty_type_list_is_still_active() {
        let mut filters = FilterSet::default();
        filters.set(Filter::PokemonType(vec![]));
        assert!(filters.is_active(FilterDimension::PokemonType));

        filters.clear(FilterDimension::PokemonType);
        assert!(filters.is_empty());
    }

    #[test]
    fn favourites_are_idempotent() {
        let mut favourites = Favourites::new();
        assert!(favourites.add("bulbasaur"));
        assert!(!favourites.add("bulbasaur"));
        assert_eq!(favourites.len(), 1);

        assert!(!favourites.remove("mew"));
        assert!(favourites.remove("bulbasaur"));
        assert!(favourites.is_empty());
    }
}
