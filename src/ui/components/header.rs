//! Header component renderer.

use crate::ui::helpers::{text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar centered on `row`, filling the full width.
///
/// Uses the optional `header_bg` so light themes can draw a solid bar.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title: String = header.title.chars().take(cols).collect();
    let title_len = text_width(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    frame.move_to(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        frame.push(&Theme::bg(bg));
    }

    frame.pad(padding);
    frame.push(&title);
    frame.pad(cols.saturating_sub(padding + title_len));

    frame.push(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn title_is_centered_across_the_width() {
        let mut frame = Frame::new();
        let header = HeaderInfo {
            title: "Pokédex (1/1)".to_string(),
        };
        let next = render_header(&mut frame, 2, &header, &Theme::default(), 21);

        assert_eq!(next, 3);
        assert_eq!(strip_ansi(frame.as_str()), "    Pokédex (1/1)    ");
    }
}
