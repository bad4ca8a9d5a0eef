//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin. It owns the query [`Engine`] (catalog, favourites, filters, type
//! index and projection), the [`CatalogLoader`], and the transient UI state
//! around them: selection, input mode, type picker and theme.
//!
//! # State Components
//!
//! - **Engine**: session data and the derived projection
//! - **Loader**: phase of the one-shot catalog fetch
//! - **Selection**: cursor position within the projection
//! - **Input Mode**: controls keybinding interpretation and UI layout
//! - **Type Picker**: cursor and pending selection of the type overlay
//! - **Requested Details**: item names whose type lookup was already issued
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] transforms state into a renderable UI
//! representation, handling windowing around the selection, query match
//! highlighting, type badges and the loading/error/no-match empty states.

use std::collections::{BTreeSet, HashSet};

use super::modes::{FavouriteView, InputMode, SearchFocus};
use crate::catalog::{CatalogLoader, LoadState};
use crate::domain::{Item, PokemonType};
use crate::engine::Engine;
use crate::ui::helpers::name_column_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, SearchBarInfo, TypeBadge,
    TypePickerEntry, TypePickerInfo, UIViewModel,
};

/// Cursor and pending selection of the type picker overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypePicker {
    pub cursor: usize,
    /// Ordered by picker position.
    pub selected: BTreeSet<PokemonType>,
}

impl TypePicker {
    /// Opens the picker pre-checked with the recognised tags of the active filter.
    #[must_use]
    pub fn from_filter(types: Option<&[String]>) -> Self {
        let selected = types
            .unwrap_or_default()
            .iter()
            .filter_map(|tag| tag.parse::<PokemonType>().ok())
            .collect();
        Self {
            cursor: 0,
            selected,
        }
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % PokemonType::ALL.len();
    }

    pub fn move_up(&mut self) {
        self.cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or(PokemonType::ALL.len() - 1);
    }

    pub fn toggle_at_cursor(&mut self) {
        let ty = PokemonType::ALL[self.cursor];
        if !self.selected.remove(&ty) {
            self.selected.insert(ty);
        }
    }

    /// Selected tags as the strings the engine filters on.
    #[must_use]
    pub fn selected_tags(&self) -> Vec<String> {
        self.selected.iter().map(|ty| ty.as_str().to_string()).collect()
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog snapshot, filters, favourites, type index and projection.
    pub engine: Engine,

    /// One-shot catalog fetch state machine.
    pub loader: CatalogLoader,

    /// Zero-based index of the selected item within the projection.
    ///
    /// Clamped after every engine mutation by [`AppState::update_engine`].
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Type picker state, meaningful while `input_mode` is `TypePicker`.
    pub type_picker: TypePicker,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Base URL of the API, used to build detail requests.
    pub api_url: String,

    /// Whether to request item details to populate the type index.
    pub fetch_types: bool,

    /// Names whose detail request was already issued (each at most once).
    pub requested_details: HashSet<String>,
}

impl AppState {
    /// Creates application state around a loader that has not started yet.
    #[must_use]
    pub fn new(api_url: impl Into<String>, limit: u32, theme: Theme) -> Self {
        let api_url = api_url.into();
        Self {
            engine: Engine::new(),
            loader: CatalogLoader::new(api_url.clone(), limit),
            selected_index: 0,
            input_mode: InputMode::Normal,
            type_picker: TypePicker::default(),
            theme,
            api_url,
            fetch_types: true,
            requested_details: HashSet::new(),
        }
    }

    /// Visible items, empty until the catalog is installed.
    #[must_use]
    pub fn visible_items(&self) -> &[Item] {
        self.engine.projection().unwrap_or_default()
    }

    /// Applies an engine mutation and keeps the selection inside the new projection.
    pub fn update_engine<R>(&mut self, mutate: impl FnOnce(&mut Engine) -> R) -> R {
        let result = mutate(&mut self.engine);
        self.clamp_selection();
        result
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_items().len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    /// Moves selection down by one position, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection up by one position, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        self.selected_index = self.selected_index.checked_sub(1).unwrap_or(len - 1);
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().get(self.selected_index)
    }

    #[must_use]
    pub const fn favourite_view(&self) -> FavouriteView {
        FavouriteView::from_filter(self.engine.filters().favourite)
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around selected index
    /// 3. Adjust window if near the end to maximize visible items
    /// 4. Compute relative selection index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let items = self.visible_items();

        let mut vm = UIViewModel {
            display_items: vec![],
            selected_index: 0,
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: self.compute_search_bar(),
            type_picker: self.compute_type_picker(),
        };

        if vm.empty_state.is_some() || items.is_empty() {
            return vm;
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(items.len());
        if visible_end - visible_start < available_rows && items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        vm.display_items = items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                self.compute_display_item(item, visible_start + relative_idx, cols)
            })
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(visible_start);
        vm
    }

    fn compute_display_item(&self, item: &Item, absolute_idx: usize, cols: usize) -> DisplayItem {
        let name_width = name_column_width(cols);

        let kept_chars = (item.name.chars().count() > name_width).then(|| name_width - 3);
        let name = match kept_chars {
            Some(kept) => format!("{}...", item.name.chars().take(kept).collect::<String>()),
            None => item.name.clone(),
        };

        let types = self
            .engine
            .type_index()
            .types_of(&item.name)
            .iter()
            .map(|tag| TypeBadge {
                label: tag.clone(),
                color: tag
                    .parse::<PokemonType>()
                    .ok()
                    .map(|ty| ty.color().to_string()),
            })
            .collect();

        DisplayItem {
            number: format!("#{:03}", item.id),
            highlight_ranges: Self::compute_highlight_ranges(&item.name, self.engine.query(), kept_chars),
            name,
            types,
            is_favourite: self.engine.favourites().contains(&item.name),
            is_selected: absolute_idx == self.selected_index,
        }
    }

    /// Character range of the first query occurrence in the full `name`,
    /// clipped to the displayed text.
    ///
    /// With `kept_chars` set the name is shown as its first `kept_chars`
    /// characters plus `...`; a match reaching into the hidden tail
    /// highlights the ellipsis as well.
    fn compute_highlight_ranges(
        name: &str,
        query: &str,
        kept_chars: Option<usize>,
    ) -> Vec<(usize, usize)> {
        if query.is_empty() {
            return vec![];
        }
        let Some(byte_start) = name.find(query) else {
            return vec![];
        };

        let start = name[..byte_start].chars().count();
        let end = start + query.chars().count();
        match kept_chars {
            Some(kept) if end > kept => vec![(start.min(kept), kept + 3)],
            _ => vec![(start, end)],
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let total = self.engine.catalog().map_or(0, |catalog| catalog.len());
        HeaderInfo {
            title: format!(
                " Pokédex ({}/{total})  ★ {} ",
                self.visible_items().len(),
                self.engine.favourites().len()
            ),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let filters = self.engine.filters();
        let types = match &filters.pokemon_type {
            None => "any".to_string(),
            Some(types) if types.is_empty() => "none".to_string(),
            Some(types) => types.join(", "),
        };

        FilterBarInfo {
            favourite: self.favourite_view().label().to_string(),
            types,
            query: self.engine.query().to_string(),
            any_active: !filters.is_empty() || !self.engine.query().is_empty(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: browse results  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  f: favourite"
            }
            InputMode::TypePicker => "j/k: move  Space: toggle  Enter: apply  ESC: cancel",
            InputMode::Normal => {
                "j/k: navigate  /: search  f: fav  F: fav view  t/T: types  c: clear  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match self.loader.state() {
            LoadState::Idle | LoadState::Loading => Some(EmptyState {
                message: "Loading Pokédex...".to_string(),
                subtitle: "Fetching the catalog from PokeAPI".to_string(),
                is_error: false,
            }),
            LoadState::Errored(err) => Some(EmptyState {
                message: "Error".to_string(),
                subtitle: format!("Could not load the catalog: {err}"),
                is_error: true,
            }),
            LoadState::Loaded { .. } if self.visible_items().is_empty() => Some(EmptyState {
                message: "No Pokémon match".to_string(),
                subtitle: if self.engine.filters().pokemon_type.is_some()
                    && self.engine.type_index().is_empty()
                {
                    "Types are still loading".to_string()
                } else {
                    "Press c to clear all filters".to_string()
                },
                is_error: false,
            }),
            LoadState::Loaded { .. } => None,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.engine.query().to_string(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal | InputMode::TypePicker => None,
        }
    }

    fn compute_type_picker(&self) -> Option<TypePickerInfo> {
        if self.input_mode != InputMode::TypePicker {
            return None;
        }

        let entries = PokemonType::ALL
            .iter()
            .enumerate()
            .map(|(idx, ty)| TypePickerEntry {
                label: ty.as_str().to_string(),
                color: ty.color().to_string(),
                checked: self.type_picker.selected.contains(ty),
                is_cursor: idx == self.type_picker.cursor,
            })
            .collect();

        Some(TypePickerInfo { entries })
    }

    /// Rows left for the table after header, filter bar, borders, column
    /// headers and footer (plus the search box in search mode).
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Search(_) => total_rows.saturating_sub(11),
            InputMode::Normal | InputMode::TypePicker => total_rows.saturating_sub(8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::engine::Filter;

    fn loaded_state(entries: &[(&str, u32)]) -> AppState {
        let mut state = AppState::new("https://pokeapi.co/api/v2", 150, Theme::default());
        state.loader.begin().unwrap();
        let body = serde_json::json!({
            "results": entries
                .iter()
                .map(|(name, id)| serde_json::json!({
                    "name": name,
                    "url": format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
                }))
                .collect::<Vec<_>>()
        })
        .to_string();
        let catalog: Catalog = state.loader.complete(200, body.as_bytes()).unwrap();
        state.update_engine(|engine| engine.install_catalog(catalog)).unwrap();
        state
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = loaded_state(&[("bulbasaur", 1), ("ivysaur", 2), ("venusaur", 3)]);
        state.move_selection_up();
        assert_eq!(state.selected_item().map(|i| i.name.as_str()), Some("venusaur"));
        state.move_selection_down();
        assert_eq!(state.selected_item().map(|i| i.name.as_str()), Some("bulbasaur"));
    }

    #[test]
    fn selection_is_clamped_when_projection_shrinks() {
        let mut state = loaded_state(&[("bulbasaur", 1), ("charmander", 4), ("charmeleon", 5)]);
        state.selected_index = 2;
        state.update_engine(|engine| engine.set_query("bulb"));
        assert_eq!(state.selected_index, 0);

        state.update_engine(|engine| engine.set_query("zzz"));
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn loading_state_shows_loading_message() {
        let state = AppState::new("https://pokeapi.co/api/v2", 150, Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        let empty = vm.empty_state.unwrap();
        assert!(!empty.is_error);
        assert!(empty.message.starts_with("Loading"));
    }

    #[test]
    fn errored_load_shows_error_view() {
        let mut state = AppState::new("https://pokeapi.co/api/v2", 150, Theme::default());
        state.loader.begin().unwrap();
        let _ = state.loader.complete(404, b"Not Found");

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        let empty = vm.empty_state.unwrap();
        assert!(empty.is_error);
        assert!(empty.subtitle.contains("404"));
    }

    #[test]
    fn display_items_carry_number_badges_and_favourite() {
        let mut state = loaded_state(&[("charmander", 4), ("bulbasaur", 1)]);
        state.update_engine(|engine| {
            engine.populate_types([("bulbasaur", vec!["grass".to_string(), "shadow".to_string()])]);
            engine.add_favourite("bulbasaur");
        });

        let vm = state.compute_viewmodel(24, 80);
        let first = &vm.display_items[0];
        assert_eq!(first.number, "#001");
        assert!(first.is_favourite);
        assert!(first.is_selected);
        assert_eq!(first.types[0].color.as_deref(), Some(PokemonType::Grass.color()));
        assert_eq!(first.types[1].color, None);
        assert!(vm.display_items[1].types.is_empty());
    }

    #[test]
    fn query_match_is_highlighted_by_character_range() {
        let mut state = loaded_state(&[("charmeleon", 5)]);
        state.update_engine(|engine| engine.set_query("meleon"));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(4, 10)]);
    }

    #[test]
    fn highlight_uses_full_name_when_truncated() {
        let name = "charizard-gmax-alt-form";
        let mut state = loaded_state(&[(name, 10_195)]);

        state.update_engine(|engine| engine.set_query("izard"));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].name, "charizard-gmax-al...");
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(4, 9)]);

        state.update_engine(|engine| engine.set_query("form"));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(17, 20)]);

        state.update_engine(|engine| engine.set_query("gmax-alt"));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(10, 20)]);
    }

    #[test]
    fn window_follows_selection() {
        let entries: Vec<(String, u32)> = (1..=50).map(|id| (format!("mon{id}"), id)).collect();
        let borrowed: Vec<(&str, u32)> = entries.iter().map(|(n, id)| (n.as_str(), *id)).collect();
        let mut state = loaded_state(&borrowed);
        state.selected_index = 49;

        let vm = state.compute_viewmodel(18, 80);
        assert_eq!(vm.display_items.len(), 10);
        assert_eq!(vm.display_items.last().map(|i| i.number.as_str()), Some("#050"));
        assert_eq!(vm.selected_index, 9);
    }

    #[test]
    fn no_match_state_mentions_pending_types() {
        let mut state = loaded_state(&[("bulbasaur", 1)]);
        state.update_engine(|engine| engine.set_filter(Filter::PokemonType(vec!["fire".to_string()])));
        let empty = state.compute_viewmodel(24, 80).empty_state.unwrap();
        assert_eq!(empty.subtitle, "Types are still loading");
    }

    #[test]
    fn filter_bar_reflects_engine_state() {
        let mut state = loaded_state(&[("bulbasaur", 1)]);
        assert!(!state.compute_viewmodel(24, 80).filter_bar.any_active);

        state.update_engine(|engine| {
            engine.set_filter(Filter::Favourite(false));
            engine.set_filter(Filter::PokemonType(vec![]));
        });
        let bar = state.compute_viewmodel(24, 80).filter_bar;
        assert_eq!(bar.favourite, "others");
        assert_eq!(bar.types, "none");
        assert!(bar.any_active);
    }

    #[test]
    fn type_picker_preselects_known_tags_only() {
        let tags = vec!["water".to_string(), "shadow".to_string(), "fire".to_string()];
        let picker = TypePicker::from_filter(Some(tags.as_slice()));
        assert_eq!(picker.selected_tags(), vec!["fire", "water"]);
    }

    #[test]
    fn type_picker_cursor_wraps_and_toggles() {
        let mut picker = TypePicker::default();
        picker.move_up();
        assert_eq!(picker.cursor, PokemonType::ALL.len() - 1);
        picker.toggle_at_cursor();
        assert_eq!(picker.selected_tags(), vec!["steel"]);
        picker.toggle_at_cursor();
        assert!(picker.selected.is_empty());
        picker.move_down();
        assert_eq!(picker.cursor, 0);
    }
}
