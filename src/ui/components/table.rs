//! Table component renderer.
//!
//! One row per visible item with the columns `#`, `NAME`, `TYPES` and a
//! favourite star at the right edge:
//!
//! ```text
//!  #001  bulbasaur             grass poison                         ★
//! ```
//!
//! Rows are padded to the full width so the selection background covers
//! the whole line.

use crate::ui::helpers::{self, name_column_width, text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, TypeBadge};

const NUMBER_WIDTH: usize = 5;

/// Columns used by everything except NAME and TYPES.
const FIXED_WIDTH: usize = 1 + NUMBER_WIDTH + 1 + 2 + 2;

fn types_column_width(cols: usize) -> usize {
    cols.saturating_sub(FIXED_WIDTH + name_column_width(cols))
}

/// Renders the bold column headers on `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(frame: &mut Frame, row: usize, theme: &Theme, cols: usize) -> usize {
    let name_width = name_column_width(cols);

    frame.move_to(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    frame.push(&format!(
        " {:<NUMBER_WIDTH$} {:<name_width$}  {:<types_width$}★ ",
        "#",
        "NAME",
        "TYPES",
        types_width = types_column_width(cols)
    ));
    frame.push(Theme::reset());
    row + 1
}

/// Renders every display item from `row` downwards.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(frame: &mut Frame, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_table_row(frame, current, item, theme, cols))
}

/// # Styling Precedence
///
/// 1. Selection colors (if `is_selected`)
/// 2. Query match highlights (unless selected)
/// 3. Normal text color
fn render_table_row(frame: &mut Frame, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let name_width = name_column_width(cols);
    let base_fg = if item.is_selected {
        Theme::fg(&theme.colors.selection_fg)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    frame.move_to(row, 1);
    frame.push(&base_fg);
    if item.is_selected {
        frame.push(&Theme::bg(&theme.colors.selection_bg));
    }

    frame.pad(1);
    frame.push(&format!("{:<NUMBER_WIDTH$}", item.number));
    frame.pad(1);

    helpers::push_highlighted(frame, &item.name, &item.highlight_ranges, theme, item.is_selected);
    frame.pad(name_width.saturating_sub(text_width(&item.name)) + 2);

    let types_width = types_column_width(cols);
    let used = push_badges(frame, &item.types, theme, &base_fg, types_width);
    frame.pad(types_width.saturating_sub(used));

    if item.is_favourite {
        frame.push(&Theme::fg(&theme.colors.favourite_fg));
        frame.push("★");
        frame.push(&base_fg);
    } else {
        frame.pad(1);
    }
    frame.pad(1);

    frame.push(Theme::reset());
    row + 1
}

/// Writes type badges that fit in `width`, returning the columns used.
///
/// Items whose types have not arrived show a dimmed `?`.
fn push_badges(frame: &mut Frame, badges: &[TypeBadge], theme: &Theme, base_fg: &str, width: usize) -> usize {
    if badges.is_empty() {
        if width == 0 {
            return 0;
        }
        frame.push(&Theme::fg(&theme.colors.text_dim));
        frame.push("?");
        frame.push(base_fg);
        return 1;
    }

    let mut used = 0;
    for badge in badges {
        let separator = usize::from(used > 0);
        let badge_len = text_width(&badge.label);
        if used + separator + badge_len > width {
            break;
        }

        frame.pad(separator);
        let color = badge.color.as_deref().unwrap_or(&theme.colors.text_dim);
        frame.push(&Theme::fg(color));
        frame.push(&badge.label);
        frame.push(base_fg);
        used += separator + badge_len;
    }
    used
}
