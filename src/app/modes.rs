//! Input mode and favourite view state types.
//!
//! These enums control which keybindings are active and how the favourite
//! facet is presented.
//!
//! # State Machine
//!
//! The application operates in one of three input modes:
//! - **Normal**: navigation and filter commands
//! - **Search**: free-text query, with typing or result navigation focus
//! - **`TypePicker`**: the type selection overlay
//!
//! The favourite facet cycles `All → Favourites → Others → All`.

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered results while the query stays applied.
    ///
    /// Accepts j/k for movement, f to favourite and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), f (favourite),
    /// F (cycle favourite view), t/T (type picker / clear types),
    /// c (clear all), q (quit).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),

    /// Type selection overlay is open.
    ///
    /// j/k move the cursor, space toggles a type, enter applies, esc cancels.
    TypePicker,
}

/// Presentation of the favourite filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavouriteView {
    /// Favourite dimension unset.
    #[default]
    All,
    /// Only favourites (`favourite = true`).
    Favourites,
    /// Only non-favourites (`favourite = false`).
    Others,
}

impl FavouriteView {
    #[must_use]
    pub const fn from_filter(value: Option<bool>) -> Self {
        match value {
            None => Self::All,
            Some(true) => Self::Favourites,
            Some(false) => Self::Others,
        }
    }

    #[must_use]
    pub const fn to_filter(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Favourites => Some(true),
            Self::Others => Some(false),
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Favourites,
            Self::Favourites => Self::Others,
            Self::Others => Self::All,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Favourites => "favourites",
            Self::Others => "others",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favourite_view_cycles_through_all_states() {
        let mut view = FavouriteView::default();
        let mut seen = vec![view];
        for _ in 0..3 {
            view = view.next();
            seen.push(view);
        }
        assert_eq!(
            seen,
            vec![
                FavouriteView::All,
                FavouriteView::Favourites,
                FavouriteView::Others,
                FavouriteView::All
            ]
        );
    }

    #[test]
    fn favourite_view_mirrors_filter_value() {
        for value in [None, Some(true), Some(false)] {
            assert_eq!(FavouriteView::from_filter(value).to_filter(), value);
        }
    }
}
