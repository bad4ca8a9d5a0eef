//! Error types for the Pokedexer plugin.
//!
//! This module defines the crate-level error type [`PokedexError`], the
//! catalog-specific [`LoadError`], and a [`Result`] alias used throughout the
//! plugin. Both enums derive their `Error` implementations with `thiserror`.
//!
//! Only catalog loading can fail in a way the user sees. Filtering,
//! favourites and the type index are total and never produce errors.

use thiserror::Error;

/// Failure modes of the one-shot catalog fetch.
///
/// Every variant is terminal for the session: the loader moves to its
/// `Errored` state and the UI shows the error view instead of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never produced a usable HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status code.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body was not a valid resource listing.
    #[error("malformed catalog response: {0}")]
    Malformed(String),

    /// A listed resource URL has no positive integer as its final segment.
    #[error("resource `{name}` has no numeric identifier in `{url}`")]
    MissingIdentifier {
        /// Name of the offending entry.
        name: String,
        /// URL the identifier was expected in.
        url: String,
    },

    /// The loader was driven out of order (e.g. completed before starting).
    #[error("cannot {operation} while catalog is {state}")]
    InvalidTransition {
        /// Attempted operation.
        operation: &'static str,
        /// Loader state at the time of the attempt.
        state: &'static str,
    },
}

/// The main error type for Pokedexer operations.
#[derive(Debug, Error)]
pub enum PokedexError {
    /// Catalog loading failed.
    #[error("Catalog load error: {0}")]
    Load(#[from] LoadError),

    /// The engine already owns a catalog; it is never replaced.
    #[error("Catalog already installed ({count} items)")]
    CatalogAlreadyInstalled {
        /// Size of the catalog that is already installed.
        count: usize,
    },

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Pokedexer operations.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_convert_into_crate_error() {
        let err: PokedexError = LoadError::Status(503).into();
        assert!(matches!(err, PokedexError::Load(LoadError::Status(503))));
        assert_eq!(
            err.to_string(),
            "Catalog load error: unexpected HTTP status 503"
        );
    }

    #[test]
    fn missing_identifier_names_the_entry() {
        let err = LoadError::MissingIdentifier {
            name: "missingno".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/abc/".to_string(),
        };
        assert!(err.to_string().contains("missingno"));
    }
}
