//! Search bar component renderer.
//!
//! A 3-line bordered box holding the query. While typing, a block cursor
//! follows the query; while navigating results the box is dimmed.

use crate::ui::helpers::{text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search box starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 3)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
pub fn render_search_bar(frame: &mut Frame, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    frame.move_to(row, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("┌{}┐", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    let cursor = if search.is_typing { "█" } else { "" };
    let text: String = format!(" Search: {}{cursor}", search.query)
        .chars()
        .take(inner_width)
        .collect();

    frame.move_to(row + 1, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push("│");
    if !search.is_typing {
        frame.push(Theme::dim());
    }
    frame.push(&Theme::fg(&theme.colors.text_normal));
    frame.push(&text);
    frame.pad(inner_width.saturating_sub(text_width(&text)));
    frame.push(Theme::reset());
    frame.push(&border);
    frame.push("│");
    frame.push(Theme::reset());

    frame.move_to(row + 2, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("└{}┘", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    row + 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn typing_shows_a_cursor_after_the_query() {
        let mut frame = Frame::new();
        let search = SearchBarInfo {
            query: "pika".to_string(),
            is_typing: true,
        };
        let next = render_search_bar(&mut frame, 4, &search, &Theme::default(), 40);

        assert_eq!(next, 7);
        let text = strip_ansi(frame.as_str());
        assert!(text.contains("│ Search: pika█"));
        assert_eq!(text_width(&text), 3 * 35);
    }

    #[test]
    fn navigating_hides_the_cursor() {
        let mut frame = Frame::new();
        let search = SearchBarInfo {
            query: "pika".to_string(),
            is_typing: false,
        };
        render_search_bar(&mut frame, 4, &search, &Theme::default(), 40);
        assert!(!frame.as_str().contains('█'));
    }
}
