use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::theme::theme;

/// Render the placeholder About screen.
pub fn render_about(f: &mut Frame, area: Rect) {
    let th = theme();
    let lines = vec![
        Line::from(Span::styled(
            "About",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "countrydir lists the countries of the world from the REST Countries API.",
            Style::default().fg(th.text),
        )),
        Line::from(Span::styled(
            "Search by name, sort any column and open a row to see its details.",
            Style::default().fg(th.subtext0),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(th.overlay1),
        )),
    ];
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(body, area);
}
