//! Static chrome: the header with route tabs and the key-hint footer.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus, Route};
use crate::theme::theme;
use crate::ui::helpers::truncate_to_width;

/// Tabs shown in the header, in order.
const TABS: [(Route, &str); 2] = [(Route::Home, "Home"), (Route::About, "About")];

/// What: Render the one-line header and record the tab rects for mouse clicks.
pub fn render_header(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let brand = " countrydir ";
    let mut spans = vec![
        Span::styled(
            brand,
            Style::default()
                .fg(th.crust)
                .bg(th.mauve)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    let mut x = area.x + u16::try_from(brand.width() + 2).unwrap_or(u16::MAX);
    app.nav_rects.clear();
    for (route, label) in TABS {
        let text = format!(" {label} ");
        let w = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let style = if app.route == route {
            Style::default()
                .fg(th.crust)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
        if x < area.x + area.width {
            app.nav_rects.push((route, (x, area.y, w, 1)));
        }
        x = x.saturating_add(w + 1);
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.mantle)),
        area,
    );
}

/// What: Key hints for the current route, focus and overlay.
#[must_use]
pub fn footer_hints(app: &AppState) -> &'static str {
    if app.modal.is_open() {
        return "Esc/Enter close  ·  click outside to dismiss";
    }
    match (app.route, app.focus) {
        (Route::About, _) => "Esc back  ·  Shift+Tab switch page  ·  ? help  ·  q quit",
        (Route::Home, Focus::Search) => {
            "type to filter  ·  Esc clear  ·  Enter/↓ table  ·  Ctrl+R refresh  ·  ? help  ·  Ctrl+C quit"
        }
        (Route::Home, Focus::Table) => {
            "↑↓ move  ·  ←→ page  ·  +/- rows  ·  1-7 sort  ·  Enter view  ·  / search  ·  ? help  ·  q quit"
        }
    }
}

/// Render the footer line.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let text = truncate_to_width(footer_hints(app), usize::from(area.width));
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(th.overlay1))))
            .style(Style::default().bg(th.mantle)),
        area,
    );
}
