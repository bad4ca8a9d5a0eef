//! Color themes and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two are built in and embedded at compile time;
//! a custom one can be loaded from disk with [`Theme::from_file`].
//!
//! # Built-in Themes
//!
//! - `kanto-night`: dark palette with a red accent (default)
//! - `kanto-day`: light palette for bright terminals
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f2f2f2"
//! selection_fg = "#1b1b1f"
//! selection_bg = "#e3350d"
//! text_normal = "#e6e6e6"
//! text_dim = "#7a7a85"
//! border = "#3b3b45"
//! search_bar_border = "#ffcb05"
//! match_highlight_fg = "#1b1b1f"
//! match_highlight_bg = "#ffcb05"
//! empty_state_fg = "#6390f0"
//! favourite_fg = "#ffcb05"
//! error_fg = "#e3350d"
//! filter_active_fg = "#7ac74c"
//! ```
//!
//! # Example
//!
//! ```rust
//! use pokedexer::ui::Theme;
//!
//! let theme = Theme::from_name("kanto-day")?;
//! print!("{}Pokédex{}", Theme::fg(&theme.colors.header_fg), Theme::reset());
//! # Ok::<(), pokedexer::domain::PokedexError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{PokedexError, Result};

pub const DEFAULT_THEME: &str = "kanto-night";

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, column headers and unknown type placeholders.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Favourite star.
    pub favourite_fg: String,
    /// Load error message.
    pub error_fg: String,
    /// Filter bar values that constrain the projection.
    pub filter_active_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::Theme`] for an unknown name.
    pub fn from_name(name: &str) -> Result<Self> {
        let source = match name {
            "kanto-night" => include_str!("../../themes/kanto-night.toml"),
            "kanto-day" => include_str!("../../themes/kanto-day.toml"),
            _ => return Err(PokedexError::Theme(format!("unknown built-in theme '{name}'"))),
        };

        Self::parse(source)
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::Io`] if the file cannot be read and
    /// [`PokedexError::Theme`] if it is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| PokedexError::Theme(format!("invalid theme TOML: {e}")))
    }

    /// Parses `#rrggbb`; anything else renders white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The embedded `kanto-night` theme, or its built-in palette if the
    /// embedded file cannot be parsed.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "embedded default theme is invalid, using fallback palette");
            Self::fallback()
        })
    }
}

impl Theme {
    fn fallback() -> Self {
        let hex = |value: &str| value.to_string();
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: hex("#f2f2f2"),
                header_bg: None,
                selection_fg: hex("#1b1b1f"),
                selection_bg: hex("#e3350d"),
                text_normal: hex("#e6e6e6"),
                text_dim: hex("#7a7a85"),
                border: hex("#3b3b45"),
                search_bar_border: hex("#ffcb05"),
                match_highlight_fg: hex("#1b1b1f"),
                match_highlight_bg: hex("#ffcb05"),
                empty_state_fg: hex("#6390f0"),
                favourite_fg: hex("#ffcb05"),
                error_fg: hex("#ff5c5c"),
                filter_active_fg: hex("#7ac74c"),
            },
        }
    }
}
