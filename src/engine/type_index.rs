//! Accumulating name → type tags index.
//!
//! Populated opportunistically as item details arrive, so the filter must
//! tolerate it being partially filled at any time. Merges happen at the key
//! level: a later entry for a name replaces the earlier one, entries for
//! other names are never discarded.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeIndex {
    entries: HashMap<String, Vec<String>>,
}

impl TypeIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `entries` into the index, last write wins per name.
    pub fn populate<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        for (name, tags) in entries {
            self.entries.insert(name.into(), tags);
        }
    }

    /// Known tags for `name`, or an empty slice if the name is unknown.
    #[must_use]
    pub fn types_of(&self, name: &str) -> &[String] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn unknown_names_have_no_types() {
        let index = TypeIndex::new();
        assert!(index.types_of("bulbasaur").is_empty());
        assert!(!index.contains("bulbasaur"));
    }

    #[test]
    fn populate_merges_without_dropping_other_keys() {
        let mut index = TypeIndex::new();
        index.populate([("charmander", tags(&["fire"]))]);
        index.populate([("bulbasaur", tags(&["grass", "poison"]))]);

        assert_eq!(index.types_of("charmander"), tags(&["fire"]).as_slice());
        assert_eq!(index.types_of("bulbasaur"), tags(&["grass", "poison"]).as_slice());
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn later_entry_replaces_instead_of_appending() {
        let mut index = TypeIndex::new();
        index.populate([("eevee", tags(&["normal"]))]);
        index.populate([("eevee", tags(&["fairy"]))]);
        assert_eq!(index.types_of("eevee"), tags(&["fairy"]).as_slice());
    }
}
