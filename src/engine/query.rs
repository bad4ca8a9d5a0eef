//! Projection derivation.
//!
//! [`derive`] is a pure function of its five inputs. Stages run in a fixed
//! order (favourite, type, query) so each one scans the already narrowed
//! set; the stages commute, so the order affects cost only.

use std::collections::HashSet;

use super::filters::{Favourites, FilterSet};
use super::type_index::TypeIndex;
use crate::domain::Item;

/// Derives the visible, id-sorted projection of `catalog`.
///
/// 1. `favourite`: `Some(true)` keeps favourites, `Some(false)` keeps the
///    rest.
/// 2. `pokemon_type`: keeps items whose known tags intersect the selection.
///    Items missing from `type_index` are dropped.
/// 3. `query`: case-sensitive substring match on the name, skipped when empty.
/// 4. Sort ascending by identifier.
#[must_use]
pub fn derive(
    catalog: &[Item],
    favourites: &Favourites,
    type_index: &TypeIndex,
    filters: &FilterSet,
    query: &str,
) -> Vec<Item> {
    let mut working: Vec<&Item> = catalog.iter().collect();

    if let Some(want_favourite) = filters.favourite {
        working.retain(|item| favourites.contains(&item.name) == want_favourite);
    }

    if let Some(selected) = &filters.pokemon_type {
        let selected: HashSet<&str> = selected.iter().map(String::as_str).collect();
        working.retain(|item| {
            type_index
                .types_of(&item.name)
                .iter()
                .any(|tag| selected.contains(tag.as_str()))
        });
    }

    if !query.is_empty() {
        working.retain(|item| item.name.contains(query));
    }

    working.sort_unstable_by_key(|item| item.id);
    working.into_iter().cloned().collect()
}
