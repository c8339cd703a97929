//! Small rendering helpers shared by the panes.

use ratatui::prelude::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::CellRect;

/// What: Shorten `s` to at most `max` display columns, ending with `…` when cut.
///
/// Details:
/// - Measures with `unicode-width`, so wide glyphs in native names are not split.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Convert a ratatui [`Rect`] to the tuple stored in `AppState` for hit-testing.
pub const fn rect_tuple(r: Rect) -> CellRect {
    (r.x, r.y, r.width, r.height)
}

/// What: Center a `width` x `height` box inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Truncation respects display width and marks the cut.
    fn truncate_to_width_cases() {
        assert_eq!(truncate_to_width("France", 10), "France");
        assert_eq!(truncate_to_width("French Republic", 8), "French …");
        assert_eq!(truncate_to_width("日本国", 4), "日…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    /// What: Centering clamps to the available area.
    fn centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(area, 40, 40), area);
    }
}
