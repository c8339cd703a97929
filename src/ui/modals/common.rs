use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::theme;
use crate::ui::helpers::centered_rect;

/// Label of the close button drawn on the top border.
pub const CLOSE_LABEL: &str = "[x]";

/// What: Render a centered modal with a styled title and supplied lines.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Screen area the box is centered in
/// - `title`: Border title to display
/// - `lines`: Body lines, already styled
/// - `(max_w, max_h)`: Largest box size; the box is clamped to `area`
///
/// Output:
/// - `(box_rect, close_rect)`: the drawn box and the `[x]` button on its top border.
///
/// Details:
/// - Applies consistent theming (double border, mantle background).
pub fn render_overlay_box(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    (max_w, max_h): (u16, u16),
) -> (Rect, Rect) {
    let th = theme();
    let w = area.width.saturating_sub(4).min(max_w);
    let h = area.height.saturating_sub(2).min(max_h);
    let rect = centered_rect(area, w, h);
    f.render_widget(Clear, rect);
    let body = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .title_top(
                    Line::from(Span::styled(
                        CLOSE_LABEL,
                        Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                    ))
                    .right_aligned(),
                )
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(body, rect);
    let close_w = 3;
    let close = Rect {
        x: (rect.x + rect.width).saturating_sub(close_w + 1),
        y: rect.y,
        width: close_w,
        height: 1,
    };
    (rect, close)
}
