//! Pokedexer: a Zellij plugin for browsing and filtering the Pokédex.
//!
//! The plugin loads a fixed-size catalog of creatures from PokeAPI once, then
//! lets the user narrow it down with:
//! - A favourites facet (all / favourites only / everything else)
//! - A multi-select type filter, fed by per-item detail lookups
//! - A case-sensitive free-text query over names
//!
//! The visible list is always sorted by the catalog identifier and is
//! re-derived whenever any of its inputs change.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host API calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Events → Actions
//! │  - Event handling, input modes                      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engine        │   │ Catalog       │
//! │ (ui/)         │   │ (engine/)     │   │ (catalog/)    │
//! │ - Rendering   │   │ - Filters     │   │ - Loader      │
//! │ - Theming     │   │ - Type index  │   │ - API types   │
//! │ - Components  │   │ - Projection  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Items, type tags, errors                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: One-shot catalog loader and PokeAPI wire types
//! - [`domain`]: Core domain types (items, type tags, errors)
//! - [`engine`]: Filter set, type index and projection derivation
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/pokedexer.wasm" {
//!         api_url "https://pokeapi.co/api/v2"
//!         limit "151"
//!         fetch_types "true"
//!         theme "kanto-night"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    build `AppState`, request web access and subscribe to events
//! 2. **Permission Granted**: the loader starts and the catalog request is sent
//! 3. **Catalog Response**: the catalog is installed, the first projection is
//!    derived and one detail request per item is sent
//! 4. **Detail Responses**: type tags are merged into the type index and the
//!    projection is re-derived
//!
//! # Example
//!
//! ```rust
//! use pokedexer::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), pokedexer::PokedexError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator with truecolor

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FavouriteView, InputMode, SearchFocus};
pub use catalog::{Catalog, CatalogLoader, LoadState};
pub use domain::{Item, LoadError, PokedexError, PokemonType, Result};
pub use engine::{Engine, Filter, FilterDimension, FilterSet};
pub use ui::Theme;

use std::collections::BTreeMap;

use infrastructure::expand_tilde;

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_LIMIT: u32 = 150;
pub const MAX_LIMIT: u32 = 2000;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/pokedexer.wasm" {
///     limit "251"
///     theme_file "~/.config/pokedexer/theme.toml"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the API, without trailing slash. Default: PokeAPI v2
    pub api_url: String,

    /// Number of catalog entries requested, `1..=2000`. Default: `150`
    pub limit: u32,

    /// Whether to request per-item details to learn their types. Default: `true`
    pub fetch_types: bool,

    /// Built-in theme name (`kanto-night`, `kanto-day`). Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, `~` already expanded to `/host`.
    pub theme_file: Option<String>,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...). Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            limit: DEFAULT_LIMIT,
            fetch_types: true,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `api_url`: trailing slashes trimmed; blank falls back to the default
    /// - `limit`: `u32` in `1..=2000`, otherwise the default
    /// - `fetch_types`: `true`/`false`, otherwise the default
    /// - `theme`, `trace_level`: taken as given
    /// - `theme_file`: `~` expanded to the sandbox home
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pokedexer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("limit".to_string(), "151".to_string());
    /// map.insert("fetch_types".to_string(), "false".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.limit, 151);
    /// assert!(!config.fetch_types);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let api_url = config
            .get("api_url")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let limit = config
            .get("limit")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|limit| (1..=MAX_LIMIT).contains(limit))
            .unwrap_or(defaults.limit);

        let fetch_types = config
            .get("fetch_types")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(defaults.fetch_types);

        Self {
            api_url,
            limit,
            fetch_types,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").map(|path| expand_tilde(path)),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Resolves the theme: file first, then built-in name, then the default.
    ///
    /// # Errors
    ///
    /// Returns the theme error of whichever source was configured and failed.
    pub fn load_theme(&self) -> Result<Theme> {
        if let Some(path) = &self.theme_file {
            return Theme::from_file(path);
        }
        self.theme_name
            .as_deref()
            .map_or_else(|| Ok(Theme::default()), Theme::from_name)
    }
}

/// Builds the initial application state from configuration.
///
/// The catalog loader is left `Idle`; loading starts when web access is
/// granted. A theme that fails to load is logged and replaced by the default.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = %config.api_url, limit = config.limit, "initializing pokedexer plugin");

    let theme = config.load_theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    let mut state = AppState::new(config.api_url.clone(), config.limit, theme);
    state.fetch_types = config.fetch_types;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn values_are_parsed_and_normalised() {
        let config = Config::from_zellij(&map(&[
            ("api_url", "http://localhost:8000/api/v2/"),
            ("limit", " 251 "),
            ("fetch_types", "false"),
            ("theme", "kanto-day"),
            ("theme_file", "~/themes/mine.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.api_url, "http://localhost:8000/api/v2");
        assert_eq!(config.limit, 251);
        assert!(!config.fetch_types);
        assert_eq!(config.theme_name.as_deref(), Some("kanto-day"));
        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/mine.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn out_of_range_values_fall_back() {
        for limit in ["0", "2001", "-3", "many"] {
            let config = Config::from_zellij(&map(&[("limit", limit), ("fetch_types", "yes")]));
            assert_eq!(config.limit, DEFAULT_LIMIT);
            assert!(config.fetch_types);
        }
        assert_eq!(Config::from_zellij(&map(&[("api_url", " / ")])).api_url, DEFAULT_API_URL);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("johto".to_string()),
            ..Config::default()
        };
        assert!(config.load_theme().is_err());
        assert_eq!(initialize(&config).theme, Theme::default());
    }

    #[test]
    fn initialize_carries_configuration_into_state() {
        let config = Config {
            limit: 3,
            fetch_types: false,
            theme_name: Some("kanto-day".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert!(!state.fetch_types);
        assert_eq!(state.theme.name, "kanto-day");
        assert_eq!(state.loader.state(), &LoadState::Idle);
    }
}
