//! Domain layer for the Pokedexer plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Catalog item model and identifier parsing
//! - [`pokemon_type`]: The closed enumeration of type tags

pub mod error;
pub mod item;
pub mod pokemon_type;

pub use error::{LoadError, PokedexError, Result};
pub use item::Item;
pub use pokemon_type::PokemonType;
