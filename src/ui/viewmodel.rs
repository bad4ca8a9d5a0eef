//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready data only: formatted numbers, badge colours, highlight
//! ranges and selection flags.

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Visible window of the projection.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected item within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub filter_bar: FilterBarInfo,

    pub footer: FooterInfo,

    /// Replaces the table when loading, errored, or nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Present in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Present while the type picker is open.
    pub type_picker: Option<TypePickerInfo>,
}

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Identifier formatted for display (`#025`).
    pub number: String,

    pub name: String,

    /// Known types; empty while the item's details have not arrived.
    pub types: Vec<TypeBadge>,

    pub is_favourite: bool,

    pub is_selected: bool,

    /// Character ranges of the query match in `name`.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// A coloured type label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBadge {
    pub label: String,
    /// `None` for tags outside the known enumeration.
    pub color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Current filter values, for the line under the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub favourite: String,
    pub types: String,
    pub query: String,
    /// Whether any dimension or the query constrains the projection.
    pub any_active: bool,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown instead of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// Render with the error colour.
    pub is_error: bool,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    pub is_typing: bool,
}

/// Type picker overlay contents.
#[derive(Debug, Clone)]
pub struct TypePickerInfo {
    pub entries: Vec<TypePickerEntry>,
}

#[derive(Debug, Clone)]
pub struct TypePickerEntry {
    pub label: String,
    pub color: String,
    pub checked: bool,
    pub is_cursor: bool,
}
