use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::theme;
use crate::ui::modals::common::render_overlay_box;

/// Key bindings listed in the help overlay, grouped by pane.
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Help overlay", "?  F1"),
            ("Refresh list", "Ctrl+R"),
            ("Switch page", "Shift+Tab"),
            ("Quit", "Ctrl+C"),
        ],
    ),
    (
        "Search",
        &[
            ("Edit filter", "type / Backspace"),
            ("Clear filter", "Esc"),
            ("Go to table", "Enter  ↓  Tab"),
        ],
    ),
    (
        "Table",
        &[
            ("Move cursor", "↑ ↓  k j"),
            ("Change page", "← →  PgUp PgDn"),
            ("Rows per page", "+  -"),
            ("Sort by column", "1 .. 7"),
            ("View details", "Enter  v  Space"),
            ("Back to search", "/  Esc"),
            ("About", "a"),
            ("Quit", "q"),
        ],
    ),
];

/// What: Build the help body.
fn help_lines() -> Vec<Line<'static>> {
    let th = theme();
    let mut lines = Vec::new();
    for (section, rows) in BINDINGS {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            *section,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )));
        for (label, keys) in *rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {label:18}"),
                    Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("[{keys}]"),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
    }
    lines
}

/// Render the help overlay; returns `(box_rect, close_rect)`.
pub fn render_help(f: &mut Frame, area: Rect) -> (Rect, Rect) {
    render_overlay_box(f, area, "Help", help_lines(), (64, 24))
}
