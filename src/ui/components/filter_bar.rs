//! Filter bar component renderer.
//!
//! Shows the value of each filter dimension and the query on one line,
//! e.g. `fav: favourites  types: fire, water  query: char`. Values that
//! constrain the projection use the `filter_active_fg` color.

use crate::ui::helpers::{text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the filter summary on `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_filter_bar(frame: &mut Frame, row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let query = if bar.query.is_empty() { "-" } else { bar.query.as_str() };
    let fields = [
        ("fav", bar.favourite.as_str(), bar.favourite != "all"),
        ("types", bar.types.as_str(), bar.types != "any"),
        ("query", query, !bar.query.is_empty()),
    ];

    frame.move_to(row, 1);
    let mut used = 0;
    for (label, value, active) in fields {
        let segment_len = text_width(label) + text_width(value) + 4;
        if used + segment_len > cols {
            break;
        }

        frame.pad(1);
        frame.push(&Theme::fg(&theme.colors.text_dim));
        frame.push(label);
        frame.push(": ");
        let color = if active {
            &theme.colors.filter_active_fg
        } else {
            &theme.colors.text_normal
        };
        frame.push(&Theme::fg(color));
        frame.push(value);
        frame.pad(1);
        used += segment_len;
    }
    frame.pad(cols.saturating_sub(used));
    frame.push(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    fn bar(favourite: &str, types: &str, query: &str) -> FilterBarInfo {
        FilterBarInfo {
            favourite: favourite.to_string(),
            types: types.to_string(),
            query: query.to_string(),
            any_active: true,
        }
    }

    #[test]
    fn shows_every_dimension() {
        let mut frame = Frame::new();
        render_filter_bar(&mut frame, 3, &bar("favourites", "fire", "char"), &Theme::default(), 80);
        let text = strip_ansi(frame.as_str());
        assert!(text.starts_with(" fav: favourites  types: fire  query: char "));
        assert_eq!(text_width(&text), 80);
    }

    #[test]
    fn active_values_use_the_active_color() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        render_filter_bar(&mut frame, 3, &bar("all", "any", ""), &theme, 80);
        assert!(!frame.as_str().contains(&Theme::fg(&theme.colors.filter_active_fg)));

        let mut frame = Frame::new();
        render_filter_bar(&mut frame, 3, &bar("others", "any", ""), &theme, 80);
        assert!(frame.as_str().contains(&Theme::fg(&theme.colors.filter_active_fg)));
    }

    #[test]
    fn segments_that_do_not_fit_are_dropped() {
        let mut frame = Frame::new();
        render_filter_bar(&mut frame, 3, &bar("all", "any", "bulbasaur"), &Theme::default(), 20);
        let text = strip_ansi(frame.as_str());
        assert_eq!(text_width(&text), 20);
        assert!(!text.contains("query"));
    }
}
