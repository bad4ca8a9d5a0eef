//! Footer component renderer.

use crate::ui::helpers::{text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed on `row`.
///
/// Hints longer than the terminal are cut at the right edge so the line
/// never wraps into the next row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hints: String = footer.keybindings.chars().take(cols).collect();
    let hints_len = text_width(&hints);
    let padding = cols.saturating_sub(hints_len) / 2;

    frame.move_to(row, 1);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.pad(padding);
    frame.push(&hints);
    frame.pad(cols.saturating_sub(padding + hints_len));
    frame.push(Theme::reset());
    row + 1
}
