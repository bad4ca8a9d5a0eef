//! Shared rendering utilities.
//!
//! Components draw into a [`Frame`], an ANSI buffer addressed by 1-indexed
//! cursor positions. The renderer prints the finished frame in one write,
//! and tests inspect it as a string.
//!
//! All width arithmetic uses character counts, not bytes, since names and
//! the header contain non-ASCII characters (`é`, `★`).

use crate::ui::theme::Theme;

/// ANSI output buffer for one render pass.
#[derive(Debug, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `row`, `col` (both 1-indexed).
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Display width of `text`, counted in characters.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Width of the NAME column for a terminal `cols` wide.
#[must_use]
pub fn name_column_width(cols: usize) -> usize {
    (cols / 3).clamp(8, 20)
}

/// Writes `text` with the given character ranges in match colors.
///
/// Ranges are `(start, end)` character indices, end exclusive. A selected row
/// keeps its selection colors, so highlighting is skipped there.
pub fn push_highlighted(
    frame: &mut Frame,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        frame.push(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut cursor = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > cursor {
            frame.push(&chars[cursor..start].iter().collect::<String>());
        }

        frame.push(&Theme::fg(&theme.colors.match_highlight_fg));
        frame.push(&Theme::bg(&theme.colors.match_highlight_bg));
        frame.push(&chars[start..end].iter().collect::<String>());
        frame.push(Theme::reset());
        frame.push(&Theme::fg(&theme.colors.text_normal));

        cursor = end;
    }

    if cursor < chars.len() {
        frame.push(&chars[cursor..].iter().collect::<String>());
    }
}

/// Removes ANSI escape sequences, leaving the visible text.
#[cfg(test)]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequences end with an ASCII letter
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
