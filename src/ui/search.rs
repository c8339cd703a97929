use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::ui::helpers::rect_tuple;

/// What: Render the search field and place the terminal cursor after the text when focused.
pub fn render_search(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Search);
    let input_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let title = if focused {
        "Search by name (focused)"
    } else {
        "Search by name"
    };
    let input = Paragraph::new(input_line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
        );
    f.render_widget(input, area);
    app.search_rect = Some(rect_tuple(area));

    if focused && !app.modal.is_open() {
        let right = area.x + area.width.saturating_sub(2);
        let cols = u16::try_from(app.input.width()).unwrap_or(u16::MAX);
        let x = (area.x + 1 + 2).saturating_add(cols).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
