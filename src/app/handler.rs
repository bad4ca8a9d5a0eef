//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input,
//! permission results and web responses, translating them into engine
//! mutations and action sequences. It is the primary control flow
//! coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `Engine` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`, `CloseFocus`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`,
//!   `Char`, `Backspace`, `Escape`
//! - **Filters**: `ToggleFavourite`, `CycleFavouriteView`, `OpenTypePicker`,
//!   `ToggleTypeAtCursor`, `ApplyTypePicker`, `ClearTypeFilter`, `ClearAllFilters`
//! - **System**: `PermissionsGranted`, `PermissionsDenied`
//! - **Web**: `CatalogResponse`, `DetailResponse`
//!
//! # Example
//!
//! ```rust
//! use pokedexer::{handle_event, Action, AppState, Event};
//! use pokedexer::ui::theme::Theme;
//!
//! let mut state = AppState::new("https://pokeapi.co/api/v2", 3, Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert_eq!(
//!     actions,
//!     vec![Action::FetchCatalog { url: "https://pokeapi.co/api/v2/pokemon?limit=3&offset=0".to_string() }]
//! );
//! # Ok::<(), pokedexer::domain::PokedexError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState, TypePicker};
use crate::catalog::api;
use crate::domain::Result;
use crate::engine::{Filter, FilterDimension};

/// Events triggered by user input, permission results or web responses.
///
/// The event handler processes these sequentially, so state transitions are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (wraps). Moves the picker cursor while the type picker is open.
    KeyDown,
    /// Moves the cursor up (wraps). Moves the picker cursor while the type picker is open.
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters search mode with typing focus, keeping the current query.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the results list (from typing focus).
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Cancels the current mode: clears the query in search, discards picker changes.
    Escape,

    /// Flips favourite membership of the selected item.
    ToggleFavourite,
    /// Cycles the favourite facet `all → favourites → others → all`.
    CycleFavouriteView,
    /// Opens the type picker pre-checked with the active type filter.
    OpenTypePicker,
    /// Checks or unchecks the type under the picker cursor.
    ToggleTypeAtCursor,
    /// Closes the picker and applies its selection; an empty selection clears the type filter.
    ApplyTypePicker,
    /// Clears the type filter dimension.
    ClearTypeFilter,
    /// Clears both filter dimensions and the query in one re-derivation.
    ClearAllFilters,

    /// Web access was granted; the catalog load may start.
    PermissionsGranted,
    /// Web access was refused; the load fails immediately.
    PermissionsDenied,

    /// Response of the catalog listing request.
    CatalogResponse {
        status: u16,
        body: Vec<u8>,
    },
    /// Response of one detail request.
    DetailResponse {
        /// Item the request was issued for.
        name: String,
        status: u16,
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the plugin
/// runtime; the list is empty when the event has no side effects.
///
/// # Errors
///
/// Returns [`crate::domain::PokedexError::CatalogAlreadyInstalled`] if a
/// second catalog reaches the engine. Load failures are not errors here:
/// they move the loader to `Errored` and render the error view.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.kind()).entered();

    match event {
        Event::KeyDown => {
            if state.input_mode == InputMode::TypePicker {
                state.type_picker.move_down();
            } else {
                state.move_selection_down();
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.input_mode == InputMode::TypePicker {
                state.type_picker.move_up();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::SearchMode | Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.engine.query().is_empty() {
                tracing::debug!("empty query, leaving search mode");
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.engine.query(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.update_engine(|engine| engine.set_query(""));
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }

            let mut query = state.engine.query().to_string();
            query.push(*c);
            tracing::trace!(query = %query, "search query updated");
            state.update_engine(|engine| engine.set_query(query));
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }

            let mut query = state.engine.query().to_string();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.update_engine(|engine| engine.set_query(query));
            Ok((true, vec![]))
        }
        Event::Escape => match state.input_mode {
            InputMode::TypePicker => {
                tracing::debug!("type picker cancelled");
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Search(_) => {
                state.input_mode = InputMode::Normal;
                state.update_engine(|engine| engine.set_query(""));
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },

        Event::ToggleFavourite => {
            let Some(name) = state.selected_item().map(|item| item.name.clone()) else {
                tracing::debug!("no item selected");
                return Ok((false, vec![]));
            };
            let now_favourite = state.update_engine(|engine| engine.toggle_favourite(&name));
            tracing::debug!(name = %name, favourite = now_favourite, "favourite toggled");
            Ok((true, vec![]))
        }
        Event::CycleFavouriteView => {
            let view = state.favourite_view().next();
            tracing::debug!(view = view.label(), "favourite view changed");
            state.update_engine(|engine| match view.to_filter() {
                Some(value) => engine.set_filter(Filter::Favourite(value)),
                None => engine.clear_filter(FilterDimension::Favourite),
            });
            Ok((true, vec![]))
        }
        Event::OpenTypePicker => {
            state.type_picker =
                TypePicker::from_filter(state.engine.filters().pokemon_type.as_deref());
            state.input_mode = InputMode::TypePicker;
            Ok((true, vec![]))
        }
        Event::ToggleTypeAtCursor => {
            if state.input_mode != InputMode::TypePicker {
                return Ok((false, vec![]));
            }
            state.type_picker.toggle_at_cursor();
            Ok((true, vec![]))
        }
        Event::ApplyTypePicker => {
            if state.input_mode != InputMode::TypePicker {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;

            let tags = state.type_picker.selected_tags();
            tracing::debug!(types = ?tags, "type filter applied");
            state.update_engine(|engine| {
                if tags.is_empty() {
                    engine.clear_filter(FilterDimension::PokemonType);
                } else {
                    engine.set_filter(Filter::PokemonType(tags));
                }
            });
            Ok((true, vec![]))
        }
        Event::ClearTypeFilter => {
            if state.engine.filters().pokemon_type.is_none() {
                return Ok((false, vec![]));
            }
            state.update_engine(|engine| engine.clear_filter(FilterDimension::PokemonType));
            Ok((true, vec![]))
        }
        Event::ClearAllFilters => {
            tracing::debug!("clearing all filters and query");
            state.update_engine(|engine| {
                engine.batch(|inputs| {
                    inputs.clear_filter(FilterDimension::Favourite);
                    inputs.clear_filter(FilterDimension::PokemonType);
                    inputs.set_query("");
                });
            });
            Ok((true, vec![]))
        }

        Event::PermissionsGranted => match state.loader.begin() {
            Ok(url) => Ok((true, vec![Action::FetchCatalog { url }])),
            Err(err) => {
                tracing::debug!(error = %err, "catalog load already started");
                Ok((false, vec![]))
            }
        },
        Event::PermissionsDenied => {
            if state.loader.begin().is_ok() {
                state.loader.fail("web access permission denied");
            }
            Ok((true, vec![]))
        }
        Event::CatalogResponse { status, body } => {
            let catalog = match state.loader.complete(*status, body) {
                Ok(catalog) => catalog,
                Err(err) => {
                    tracing::debug!(error = %err, "catalog response rejected");
                    return Ok((true, vec![]));
                }
            };

            state.update_engine(|engine| engine.install_catalog(catalog))?;
            Ok((true, detail_requests(state)))
        }
        Event::DetailResponse { name, status, body } => {
            if !(200..300).contains(status) {
                tracing::debug!(name = %name, status = status, "detail request failed");
                return Ok((false, vec![]));
            }

            match api::parse_detail(body) {
                Ok(detail) => {
                    let tags = detail.type_tags();
                    tracing::trace!(name = %name, types = ?tags, "types received");
                    state.update_engine(|engine| engine.populate_types([(name.clone(), tags)]));
                    Ok((true, vec![]))
                }
                Err(err) => {
                    tracing::debug!(name = %name, error = %err, "unreadable detail response");
                    Ok((false, vec![]))
                }
            }
        }
    }
}

/// Detail requests for every catalog item not yet requested.
fn detail_requests(state: &mut AppState) -> Vec<Action> {
    if !state.fetch_types {
        return vec![];
    }
    let AppState {
        engine,
        requested_details,
        api_url,
        ..
    } = state;
    let Some(catalog) = engine.catalog() else {
        return vec![];
    };

    let actions: Vec<Action> = catalog
        .items()
        .iter()
        .filter(|item| requested_details.insert(item.name.clone()))
        .map(|item| Action::FetchDetail {
            name: item.name.clone(),
            url: api::detail_url(api_url, &item.name),
        })
        .collect();

    tracing::debug!(requests = actions.len(), "requesting item details");
    actions
}

impl Event {
    const fn kind(&self) -> &'static str {
        match self {
            Self::KeyDown => "key_down",
            Self::KeyUp => "key_up",
            Self::CloseFocus => "close_focus",
            Self::SearchMode => "search_mode",
            Self::FocusSearchBar => "focus_search_bar",
            Self::FocusResults => "focus_results",
            Self::ExitSearch => "exit_search",
            Self::Char(_) => "char",
            Self::Backspace => "backspace",
            Self::Escape => "escape",
            Self::ToggleFavourite => "toggle_favourite",
            Self::CycleFavouriteView => "cycle_favourite_view",
            Self::OpenTypePicker => "open_type_picker",
            Self::ToggleTypeAtCursor => "toggle_type_at_cursor",
            Self::ApplyTypePicker => "apply_type_picker",
            Self::ClearTypeFilter => "clear_type_filter",
            Self::ClearAllFilters => "clear_all_filters",
            Self::PermissionsGranted => "permissions_granted",
            Self::PermissionsDenied => "permissions_denied",
            Self::CatalogResponse { .. } => "catalog_response",
            Self::DetailResponse { .. } => "detail_response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LoadState;
    use crate::ui::theme::Theme;

    const LISTING: &[u8] = br#"{"count": 3, "results": [
        {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/"},
        {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
        {"name": "charmeleon", "url": "https://pokeapi.co/api/v2/pokemon/5/"}
    ]}"#;

    fn detail(name: &str, types: &[&str]) -> Event {
        let slots: Vec<_> = types
            .iter()
            .enumerate()
            .map(|(idx, ty)| {
                serde_json::json!({
                    "slot": idx + 1,
                    "type": {"name": ty, "url": format!("https://pokeapi.co/api/v2/type/{ty}/")}
                })
            })
            .collect();
        Event::DetailResponse {
            name: name.to_string(),
            status: 200,
            body: serde_json::json!({"name": name, "types": slots})
                .to_string()
                .into_bytes(),
        }
    }

    fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|event| handle_event(state, event).unwrap().1)
            .collect()
    }

    fn loaded() -> AppState {
        let mut state = AppState::new("https://pokeapi.co/api/v2", 3, Theme::default());
        send(
            &mut state,
            &[
                Event::PermissionsGranted,
                Event::CatalogResponse {
                    status: 200,
                    body: LISTING.to_vec(),
                },
            ],
        );
        state
    }

    fn visible(state: &AppState) -> Vec<&str> {
        state
            .visible_items()
            .iter()
            .map(|item| item.name.as_str())
            .collect()
    }

    #[test]
    fn catalog_response_installs_sorted_catalog_and_requests_details() {
        let mut state = AppState::new("https://pokeapi.co/api/v2", 3, Theme::default());
        let actions = send(
            &mut state,
            &[
                Event::PermissionsGranted,
                Event::CatalogResponse {
                    status: 200,
                    body: LISTING.to_vec(),
                },
            ],
        );

        assert_eq!(visible(&state), vec!["bulbasaur", "charmander", "charmeleon"]);
        assert_eq!(state.loader.state(), &LoadState::Loaded { count: 3 });
        assert_eq!(actions.len(), 4);
        assert!(actions.contains(&Action::FetchDetail {
            name: "bulbasaur".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/bulbasaur".to_string(),
        }));
    }

    #[test]
    fn details_are_not_requested_when_disabled() {
        let mut state = AppState::new("https://pokeapi.co/api/v2", 3, Theme::default());
        state.fetch_types = false;
        let actions = send(
            &mut state,
            &[
                Event::PermissionsGranted,
                Event::CatalogResponse {
                    status: 200,
                    body: LISTING.to_vec(),
                },
            ],
        );
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn second_permission_grant_does_not_refetch() {
        let mut state = loaded();
        assert!(send(&mut state, &[Event::PermissionsGranted]).is_empty());
    }

    #[test]
    fn failed_catalog_response_shows_error() {
        let mut state = AppState::new("https://pokeapi.co/api/v2", 3, Theme::default());
        let actions = send(
            &mut state,
            &[
                Event::PermissionsGranted,
                Event::CatalogResponse {
                    status: 503,
                    body: vec![],
                },
            ],
        );
        assert_eq!(actions.len(), 1);
        assert!(state.engine.projection().is_none());
        assert!(state.loader.error().is_some());
    }

    #[test]
    fn denied_permission_is_a_load_error() {
        let mut state = AppState::new("https://pokeapi.co/api/v2", 3, Theme::default());
        send(&mut state, &[Event::PermissionsDenied]);
        assert!(state.loader.state().is_terminal());
        assert!(state.compute_viewmodel(24, 80).empty_state.unwrap().is_error);
    }

    #[test]
    fn typing_narrows_and_backspace_widens() {
        let mut state = loaded();
        send(
            &mut state,
            &[Event::SearchMode, Event::Char('m'), Event::Char('e')],
        );
        assert_eq!(visible(&state), vec!["charmeleon"]);

        send(&mut state, &[Event::Backspace]);
        assert_eq!(visible(&state), vec!["charmander", "charmeleon"]);
    }

    #[test]
    fn characters_are_ignored_outside_typing_focus() {
        let mut state = loaded();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.engine.query(), "");
    }

    #[test]
    fn escape_leaves_search_and_clears_query() {
        let mut state = loaded();
        send(&mut state, &[Event::SearchMode, Event::Char('b'), Event::Escape]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(visible(&state).len(), 3);
    }

    #[test]
    fn focus_results_with_empty_query_returns_to_normal() {
        let mut state = loaded();
        send(&mut state, &[Event::SearchMode, Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Normal);

        send(&mut state, &[Event::SearchMode, Event::Char('c'), Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn toggling_favourite_under_favourite_filter_drops_item() {
        let mut state = loaded();
        send(
            &mut state,
            &[Event::ToggleFavourite, Event::CycleFavouriteView],
        );
        assert_eq!(visible(&state), vec!["bulbasaur"]);

        send(&mut state, &[Event::ToggleFavourite]);
        assert!(visible(&state).is_empty());
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn favourite_view_cycles_back_to_all() {
        let mut state = loaded();
        send(&mut state, &[Event::ToggleFavourite]);

        send(&mut state, &[Event::CycleFavouriteView, Event::CycleFavouriteView]);
        assert_eq!(visible(&state), vec!["charmander", "charmeleon"]);

        send(&mut state, &[Event::CycleFavouriteView]);
        assert_eq!(state.engine.filters().favourite, None);
        assert_eq!(visible(&state).len(), 3);
    }

    #[test]
    fn type_picker_applies_selection_and_details_refill() {
        let mut state = loaded();
        // cursor starts on grass; move to fire
        send(
            &mut state,
            &[
                Event::OpenTypePicker,
                Event::KeyDown,
                Event::ToggleTypeAtCursor,
                Event::ApplyTypePicker,
            ],
        );
        assert_eq!(
            state.engine.filters().pokemon_type,
            Some(vec!["fire".to_string()])
        );
        assert!(visible(&state).is_empty());

        send(
            &mut state,
            &[
                detail("charmander", &["fire"]),
                detail("bulbasaur", &["grass", "poison"]),
            ],
        );
        assert_eq!(visible(&state), vec!["charmander"]);
    }

    #[test]
    fn empty_picker_selection_clears_type_filter() {
        let mut state = loaded();
        send(
            &mut state,
            &[
                Event::OpenTypePicker,
                Event::ToggleTypeAtCursor,
                Event::ApplyTypePicker,
            ],
        );
        assert!(state.engine.filters().pokemon_type.is_some());

        send(
            &mut state,
            &[
                Event::OpenTypePicker,
                Event::ToggleTypeAtCursor,
                Event::ApplyTypePicker,
            ],
        );
        assert_eq!(state.engine.filters().pokemon_type, None);
    }

    #[test]
    fn escape_discards_picker_changes() {
        let mut state = loaded();
        send(
            &mut state,
            &[Event::OpenTypePicker, Event::ToggleTypeAtCursor, Event::Escape],
        );
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.engine.filters().pokemon_type, None);
    }

    #[test]
    fn clear_all_filters_rederives_once() {
        let mut state = loaded();
        send(
            &mut state,
            &[
                Event::CycleFavouriteView,
                Event::OpenTypePicker,
                Event::ToggleTypeAtCursor,
                Event::ApplyTypePicker,
                Event::SearchMode,
                Event::Char('z'),
                Event::FocusResults,
            ],
        );
        let before = state.engine.derivation_count();

        send(&mut state, &[Event::ClearAllFilters]);
        assert_eq!(state.engine.derivation_count(), before + 1);
        assert!(state.engine.filters().is_empty());
        assert_eq!(state.engine.query(), "");
        assert_eq!(visible(&state).len(), 3);
    }

    #[test]
    fn failed_detail_response_leaves_index_untouched() {
        let mut state = loaded();
        let actions = send(
            &mut state,
            &[Event::DetailResponse {
                name: "bulbasaur".to_string(),
                status: 404,
                body: vec![],
            }],
        );
        assert!(actions.is_empty());
        assert!(state.engine.type_index().is_empty());
    }

    #[test]
    fn picker_cursor_moves_instead_of_selection() {
        let mut state = loaded();
        send(&mut state, &[Event::OpenTypePicker, Event::KeyUp]);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.type_picker.cursor, 17);
    }
}
