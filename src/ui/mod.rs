//! Terminal rendering layer.
//!
//! Transforms view models into ANSI-styled output through small components
//! that draw into a shared [`helpers::Frame`].
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Frame buffer, width and highlighting utilities
//! - [`theme`]: Color themes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, SearchBarInfo, TypeBadge,
    TypePickerEntry, TypePickerInfo, UIViewModel,
};
