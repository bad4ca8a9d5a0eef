//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! The plugin shim translates them into Zellij host calls (web requests,
//! hiding the pane), keeping the library free of host API calls.
//!
//! # Example
//!
//! ```rust
//! use pokedexer::Action;
//!
//! let actions = vec![
//!     Action::FetchCatalog { url: "https://pokeapi.co/api/v2/pokemon?limit=150&offset=0".to_string() },
//! ];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the one-shot catalog listing request.
    ///
    /// The response comes back as a `CatalogResponse` event.
    FetchCatalog {
        /// Listing URL.
        url: String,
    },

    /// Requests the detail record of one item to learn its types.
    ///
    /// The response comes back as a `DetailResponse` event for `name`.
    FetchDetail {
        /// Item name the response will be indexed under.
        name: String,
        /// Detail URL.
        url: String,
    },
}
