//! Zellij plugin wrapper and entry point.
//!
//! The thin integration layer between the pokedexer library and the Zellij
//! plugin system. All host API calls live here; everything else is plain
//! library code.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult` and
//!    `PermissionRequestResult` events
//! 3. **Permission**: Once web access is granted the catalog request is sent
//! 4. **Update**: Translate host events, delegate to `handle_event`, execute actions
//! 5. **Render**: Call the library render function
//!
//! # Web Requests
//!
//! Every request carries a context map whose `kind` entry routes the
//! response back: `catalog` for the listing, `detail` (plus `name`) for
//! per-item lookups.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `/`: Enter search mode
//! - `f`: Toggle favourite on the selected item
//! - `F`: Cycle the favourite facet
//! - `t`: Open the type picker, `T`: clear the type filter
//! - `c`: Clear all filters and the query
//! - `q`: Close plugin
//!
//! In search mode (typing):
//! - Characters edit the query, `Enter` browses results, `Esc` exits
//!
//! In search mode (navigating):
//! - `j`/`k` move, `f` toggles favourite, `/` edits the query, `Esc` exits
//!
//! In the type picker:
//! - `j`/`k` move, `Space` toggles, `Enter` applies, `Esc` cancels

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use pokedexer::{handle_event, Action, Config, Event, InputMode, SearchFocus};

const CONTEXT_KIND: &str = "kind";
const CONTEXT_NAME: &str = "name";
const KIND_CATALOG: &str = "catalog";
const KIND_DETAIL: &str = "detail";

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: pokedexer::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: pokedexer::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes state, requests web access and
    /// subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        pokedexer::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(api_url = %config.api_url, limit = config.limit, fetch_types = config.fetch_types, "parsed configuration");
        self.app = pokedexer::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a host event, runs the handler and executes its actions.
    ///
    /// Returns `true` if the plugin UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("web access granted");
                Event::PermissionsGranted
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("web access denied - catalog cannot load");
                Event::PermissionsDenied
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        pokedexer::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events according to the input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match self.app.input_mode {
            InputMode::Search(SearchFocus::Typing) => match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::FocusResults,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Search(SearchFocus::Navigating) => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Char('/') => Event::FocusSearchBar,
                BareKey::Char('f') => Event::ToggleFavourite,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
            InputMode::TypePicker => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char(' ') => Event::ToggleTypeAtCursor,
                BareKey::Enter => Event::ApplyTypePicker,
                BareKey::Esc | BareKey::Char('t') => Event::Escape,
                _ => return None,
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('f') => Event::ToggleFavourite,
                BareKey::Char('F') => Event::CycleFavouriteView,
                BareKey::Char('t') => Event::OpenTypePicker,
                BareKey::Char('T') => Event::ClearTypeFilter,
                BareKey::Char('c') => Event::ClearAllFilters,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Esc => Event::Escape,
                _ => return None,
            },
        })
    }

    /// Routes a web response by the `kind` entry of its request context.
    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        match context.get(CONTEXT_KIND).map(String::as_str) {
            Some(KIND_CATALOG) => {
                tracing::debug!(status, body_len = body.len(), "catalog response");
                Some(Event::CatalogResponse { status, body })
            }
            Some(KIND_DETAIL) => {
                let name = context.get(CONTEXT_NAME)?.clone();
                tracing::trace!(name = %name, status, "detail response");
                Some(Event::DetailResponse { name, status, body })
            }
            other => {
                tracing::debug!(kind = ?other, "ignoring web response with unknown context");
                None
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "trace")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchCatalog { url } => {
                let context = BTreeMap::from([(CONTEXT_KIND.to_string(), KIND_CATALOG.to_string())]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
            Action::FetchDetail { name, url } => {
                let context = BTreeMap::from([
                    (CONTEXT_KIND.to_string(), KIND_DETAIL.to_string()),
                    (CONTEXT_NAME.to_string(), name.clone()),
                ]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
        }
    }
}
