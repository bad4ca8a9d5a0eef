//! Empty state component renderer.
//!
//! Replaces the table while the catalog loads, after a load error, or when
//! nothing matches the filters.

use crate::ui::helpers::{text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message centered on `row` and the subtitle below it.
///
/// Errors use `error_fg`; other states use `empty_state_fg`.
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    frame.move_to(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(color));
    push_centered(frame, &empty.message, cols);
    frame.push(Theme::reset());

    frame.move_to(row + 1, 1);
    frame.push(Theme::dim());
    frame.push(&Theme::fg(&theme.colors.text_dim));
    push_centered(frame, &empty.subtitle, cols);
    frame.push(Theme::reset());
}

fn push_centered(frame: &mut Frame, text: &str, cols: usize) {
    let text: String = text.chars().take(cols).collect();
    let len = text_width(&text);
    let padding = cols.saturating_sub(len) / 2;
    frame.pad(padding);
    frame.push(&text);
    frame.pad(cols.saturating_sub(padding + len));
}
