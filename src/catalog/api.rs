//! PokeAPI wire types and request URLs.
//!
//! Only the fields the plugin reads are modelled; everything else in the
//! responses is ignored by `serde`. Parsing functions turn raw response
//! bodies into domain values and map every failure to a [`LoadError`].

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::domain::{Item, LoadError};

/// A `{ name, url }` reference as PokeAPI returns it everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Paginated listing envelope (`NamedAPIResourceList`).
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// The subset of a `Pokemon` detail response needed for the type index.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    #[serde(default)]
    pub id: Option<u32>,
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl PokemonDetail {
    /// Type tags ordered by slot (primary type first).
    #[must_use]
    pub fn type_tags(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots.into_iter().map(|slot| slot.kind.name.clone()).collect()
    }
}

/// URL of the bulk listing request: first `limit` entries, offset 0.
#[must_use]
pub fn listing_url(api_url: &str, limit: u32) -> String {
    format!("{}/pokemon?limit={limit}&offset=0", api_url.trim_end_matches('/'))
}

/// URL of the detail request for one item.
#[must_use]
pub fn detail_url(api_url: &str, name: &str) -> String {
    format!("{}/pokemon/{name}", api_url.trim_end_matches('/'))
}

/// Parses a listing response body into a catalog.
///
/// # Errors
///
/// - [`LoadError::Malformed`] if the body is not a resource listing
/// - [`LoadError::MissingIdentifier`] if any entry's URL lacks an identifier
pub fn parse_listing(body: &[u8]) -> Result<Catalog, LoadError> {
    let listing: ResourceList =
        serde_json::from_slice(body).map_err(|e| LoadError::Malformed(e.to_string()))?;

    tracing::debug!(
        listed = listing.results.len(),
        total = ?listing.count,
        has_next = listing.next.is_some(),
        "parsed catalog listing"
    );

    let items = listing
        .results
        .iter()
        .map(|resource| Item::from_resource(&resource.name, &resource.url))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::new(items))
}

/// Parses a detail response body.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] if the body does not contain a name and a
/// `types` array.
pub fn parse_detail(body: &[u8]) -> Result<PokemonDetail, LoadError> {
    serde_json::from_slice(body).map_err(|e| LoadError::Malformed(e.to_string()))
}
