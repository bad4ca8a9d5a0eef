//! Composable UI component renderers.
//!
//! Each component draws one part of the interface into a [`Frame`] and
//! returns the next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with visible/total counts
//! - [`filter_bar`]: Current favourite facet, type selection and query
//! - [`search`]: Search input box
//! - [`table`]: Item list with `#`, `NAME`, `TYPES` and favourite columns
//! - [`type_picker`]: Type selection overlay
//! - [`empty`]: Loading, error and no-match messages
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Filter bar]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Table Headers | Empty state]
//! [Table Rows]            ← type picker overlays this area
//! [Border]
//! [Footer]
//! ```

mod empty;
mod filter_bar;
mod footer;
mod header;
mod search;
mod table;
mod type_picker;

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};
use type_picker::render_type_picker;

/// Renders a horizontal border line.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.move_to(row, 1);
    frame.push(&Theme::fg(color));
    frame.push(&"─".repeat(cols));
    frame.push(Theme::reset());
    row + 1
}

/// Draws the complete layout for `vm` into `frame`.
pub fn render_layout(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let footer_row = rows.saturating_sub(1);
    let bottom_border_row = footer_row.saturating_sub(1);

    let mut row = 2;
    row = render_header(frame, row, &vm.header, theme, cols);
    row = render_filter_bar(frame, row, &vm.filter_bar, theme, cols);
    row = render_border(frame, row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        row = render_search_bar(frame, row, search, theme, cols);
    }
    let body_row = row;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(frame, body_row + 2, empty, theme, cols);
    } else {
        row = render_table_headers(frame, row, theme, cols);
        render_table_rows(frame, row, &vm.display_items, theme, cols);
    }

    if let Some(picker) = &vm.type_picker {
        render_type_picker(frame, body_row, picker, theme, bottom_border_row.saturating_sub(body_row));
    }

    render_border(frame, bottom_border_row, &theme.colors.border, cols);
    render_footer(frame, footer_row, &vm.footer, theme, cols);
}
