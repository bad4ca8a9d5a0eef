//! Catalog item domain model.
//!
//! An [`Item`] is one creature from the catalog listing: its unique name and
//! the resource URL it was listed with. The numeric identifier used for
//! display ordering is parsed out of the URL once, when the item is built,
//! so sorting never has to re-parse strings.

use serde::{Deserialize, Serialize};
use url::Url;

use super::error::LoadError;

/// A single catalog entry.
///
/// Items are immutable once fetched. Identity is `name`; ordering is `id`,
/// the positive integer found in the final path segment of `url`
/// (`https://pokeapi.co/api/v2/pokemon/25/` has id 25).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub url: String,
    pub id: u32,
}

impl Item {
    /// Builds an item from a listed `name`/`url` pair.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingIdentifier`] if the URL cannot be parsed or
    /// its last non-empty path segment is not a positive integer.
    ///
    /// # Example
    ///
    /// ```
    /// use pokedexer::domain::Item;
    ///
    /// let pikachu = Item::from_resource("pikachu", "https://pokeapi.co/api/v2/pokemon/25/")?;
    /// assert_eq!(pikachu.id, 25);
    /// # Ok::<(), pokedexer::domain::LoadError>(())
    /// ```
    pub fn from_resource(name: &str, url: &str) -> Result<Self, LoadError> {
        let id = parse_identifier(url).ok_or_else(|| LoadError::MissingIdentifier {
            name: name.to_string(),
            url: url.to_string(),
        })?;

        Ok(Self {
            name: name.to_string(),
            url: url.to_string(),
            id,
        })
    }
}

/// Extracts the trailing numeric identifier of a resource URL.
///
/// Trailing slashes are ignored. Returns `None` for relative or otherwise
/// unparseable URLs, non-numeric segments and zero.
#[must_use]
pub fn parse_identifier(url: &str) -> Option<u32> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()?;

    segment.parse::<u32>().ok().filter(|id| *id > 0)
}
