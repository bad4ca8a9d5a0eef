//! Type picker overlay renderer.
//!
//! A bordered box drawn over the table listing every type with a checkbox.
//! When the pane is too short for all entries, the list scrolls with the
//! cursor.
//!
//! ```text
//! ┌ Types ───────────────┐
//! │ > [x] fire           │
//! │   [ ] water          │
//! └──────────────────────┘
//! ```

use crate::ui::helpers::{text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TypePickerInfo;

const BOX_COL: usize = 3;
const INNER_WIDTH: usize = 22;

/// Renders the overlay with its top border on `row`, using at most `max_height` lines.
pub fn render_type_picker(frame: &mut Frame, row: usize, picker: &TypePickerInfo, theme: &Theme, max_height: usize) {
    let capacity = max_height.saturating_sub(2).min(picker.entries.len());
    if capacity == 0 {
        return;
    }

    let cursor = picker.entries.iter().position(|e| e.is_cursor).unwrap_or(0);
    let start = cursor
        .saturating_sub(capacity / 2)
        .min(picker.entries.len() - capacity);
    let border = Theme::fg(&theme.colors.border);

    frame.move_to(row, BOX_COL);
    frame.push(&border);
    frame.push(&format!("┌ Types {}┐", "─".repeat(INNER_WIDTH - 7)));

    for (offset, entry) in picker.entries[start..start + capacity].iter().enumerate() {
        frame.move_to(row + 1 + offset, BOX_COL);
        frame.push(&border);
        frame.push("│");
        frame.push(Theme::reset());
        if entry.is_cursor {
            frame.push(&Theme::fg(&theme.colors.selection_fg));
            frame.push(&Theme::bg(&theme.colors.selection_bg));
        } else {
            frame.push(&Theme::fg(&theme.colors.text_normal));
        }

        let marker = if entry.is_cursor { '>' } else { ' ' };
        let check = if entry.checked { 'x' } else { ' ' };
        let prefix = format!(" {marker} [{check}] ");
        frame.push(&prefix);
        frame.push(&Theme::fg(&entry.color));
        frame.push(&entry.label);
        frame.pad(INNER_WIDTH.saturating_sub(text_width(&prefix) + text_width(&entry.label)));

        frame.push(Theme::reset());
        frame.push(&border);
        frame.push("│");
    }

    frame.move_to(row + 1 + capacity, BOX_COL);
    frame.push(&format!("└{}┘", "─".repeat(INNER_WIDTH)));
    frame.push(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PokemonType;
    use crate::ui::helpers::strip_ansi;
    use crate::ui::viewmodel::TypePickerEntry;

    fn picker(cursor: usize) -> TypePickerInfo {
        TypePickerInfo {
            entries: PokemonType::ALL
                .iter()
                .enumerate()
                .map(|(idx, ty)| TypePickerEntry {
                    label: ty.as_str().to_string(),
                    color: ty.color().to_string(),
                    checked: *ty == PokemonType::Fire,
                    is_cursor: idx == cursor,
                })
                .collect(),
        }
    }

    #[test]
    fn lists_all_types_when_there_is_room() {
        let mut frame = Frame::new();
        render_type_picker(&mut frame, 5, &picker(0), &Theme::default(), 40);
        let text = strip_ansi(frame.as_str());

        assert!(text.contains("│ > [ ] grass"));
        assert!(text.contains("│   [x] fire"));
        assert!(text.contains("steel"));
    }

    #[test]
    fn short_panes_scroll_to_the_cursor() {
        let mut frame = Frame::new();
        render_type_picker(&mut frame, 5, &picker(17), &Theme::default(), 6);
        let text = strip_ansi(frame.as_str());

        assert!(text.contains("> [ ] steel"));
        assert!(!text.contains("grass"));
        assert_eq!(text.matches('│').count(), 8);
    }

    #[test]
    fn nothing_is_drawn_without_room() {
        let mut frame = Frame::new();
        render_type_picker(&mut frame, 5, &picker(0), &Theme::default(), 2);
        assert!(frame.as_str().is_empty());
    }
}
