//! Country table and pager.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, HighlightSpacing, Paragraph, Row, Table},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::paging::page_view;
use crate::state::{AppState, CountryRecord, Focus, SortColumn};
use crate::theme::theme;
use crate::ui::helpers::truncate_to_width;

/// Highlight marker drawn before the cursor row.
const HIGHLIGHT_SYMBOL: &str = "> ";
/// Gap between columns.
const COLUMN_SPACING: u16 = 1;
/// Label of the trailing action column.
const VIEW_LABEL: &str = "View";

/// Column widths, in on-screen order: the seven sortable columns then `View`.
fn column_constraints() -> [Constraint; 8] {
    [
        Constraint::Length(18),
        Constraint::Fill(3),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(6),
        Constraint::Length(6),
    ]
}

/// Text of one sortable cell for `record`.
fn cell_text(record: &CountryRecord, column: SortColumn) -> String {
    match column {
        SortColumn::Flag => record.flag_url.clone(),
        SortColumn::Name => record.name.clone(),
        SortColumn::Cca2 => record.cca2.clone(),
        SortColumn::Cca3 => record.cca3.clone(),
        SortColumn::NativeName => record.native_name.clone(),
        SortColumn::AlternateNames => record.alternate_names.join(", "),
        SortColumn::CallingCode => record.calling_code.clone(),
    }
}

/// What: Compute the column rectangles the table widget will use for `inner`.
///
/// Details:
/// - Mirrors the widget's own layout: a highlight gutter, then the constraints split with
///   the same spacing and flex.
fn column_areas(inner: Rect) -> Vec<Rect> {
    let gutter = u16::try_from(HIGHLIGHT_SYMBOL.width()).unwrap_or(0);
    let cols = Rect {
        x: inner.x.saturating_add(gutter),
        width: inner.width.saturating_sub(gutter),
        ..inner
    };
    Layout::horizontal(column_constraints())
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(cols)
        .to_vec()
}

/// What: Render the sortable, paginated table and record header, row and column rects.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; clickable rects and `table_state` are updated.
/// - `area`: Region for the bordered table.
pub fn render_table(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Table);
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let widths = column_areas(inner);

    let (rows, row_ids, padding, total) = {
        let view = page_view(app);
        let rows: Vec<Row<'static>> = view
            .rows
            .iter()
            .map(|r| {
                let mut cells: Vec<Cell<'static>> = SortColumn::ALL
                    .iter()
                    .zip(&widths)
                    .map(|(col, w)| {
                        let text = truncate_to_width(&cell_text(r, *col), usize::from(w.width));
                        let style = if *col == SortColumn::Name {
                            Style::default().fg(th.text).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(th.subtext0)
                        };
                        Cell::from(Span::styled(text, style))
                    })
                    .collect();
                cells.push(Cell::from(Span::styled(
                    VIEW_LABEL,
                    Style::default()
                        .fg(th.sapphire)
                        .add_modifier(Modifier::UNDERLINED),
                )));
                Row::new(cells)
            })
            .collect();
        let ids: Vec<usize> = view.rows.iter().map(|r| r.id).collect();
        (rows, ids, view.padding, view.total)
    };

    let mut all_rows = rows;
    all_rows.extend((0..padding).map(|_| Row::new(vec![Cell::from(""); 8])));

    let header_cells: Vec<Cell<'static>> = SortColumn::ALL
        .iter()
        .map(|col| {
            if *col == app.sort_column {
                Cell::from(Span::styled(
                    format!("{} {}", col.label(), app.sort_direction.arrow()),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
            } else {
                Cell::from(Span::styled(
                    col.label(),
                    Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
                ))
            }
        })
        .chain(std::iter::once(Cell::from(Span::styled(
            VIEW_LABEL,
            Style::default().fg(th.overlay1),
        ))))
        .collect();

    let loading = app.fetch_in_flight && app.countries.is_empty();
    let title = if loading {
        "Countries (loading…)".to_string()
    } else {
        format!("Countries ({total})")
    };
    let table = Table::new(all_rows, column_constraints())
        .header(Row::new(header_cells).style(Style::default().bg(th.surface1)))
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .style(Style::default().fg(th.text).bg(th.base))
        .row_highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always)
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 })),
        );

    if row_ids.is_empty() {
        app.table_state.select(None);
    } else {
        let cursor = app.cursor.min(row_ids.len() - 1);
        app.set_cursor(cursor);
    }
    f.render_stateful_widget(table, area, &mut app.table_state);

    app.header_rects = SortColumn::ALL
        .iter()
        .zip(&widths)
        .map(|(col, w)| (*col, (w.x, inner.y, w.width, 1)))
        .collect();
    app.name_col_span = widths.get(1).map(|w| (w.x, w.width));
    app.view_col_span = widths.get(7).map(|w| (w.x, w.width));

    let body_top = inner.y.saturating_add(1);
    let visible = usize::from(inner.height.saturating_sub(1));
    let offset = app.table_state.offset();
    app.row_rects = row_ids
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .filter_map(|(i, id)| {
            u16::try_from(i - offset)
                .ok()
                .map(|dy| (*id, i, body_top.saturating_add(dy)))
        })
        .collect();
}

/// What: Render the pager line and record its buttons.
///
/// Details:
/// - Shows `Page x of y`, the filtered count, and the rows-per-page selector.
pub fn render_pager(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let (page_count, total) = {
        let view = page_view(app);
        (view.page_count, view.total)
    };
    let prev = " ◀ Prev ";
    let next = " Next ▶ ";
    let info = format!(
        "  Page {} of {}  ·  {total} countries  ",
        app.page + 1,
        page_count.max(1)
    );
    let size = format!(" Rows: {} ", app.page_size);

    let can_prev = app.page > 0;
    let can_next = app.page + 1 < page_count;
    let button = |enabled: bool| {
        if enabled {
            Style::default().fg(th.crust).bg(th.sapphire)
        } else {
            Style::default().fg(th.overlay1).bg(th.surface1)
        }
    };
    let line = Line::from(vec![
        Span::styled(prev, button(can_prev)),
        Span::styled(info.clone(), Style::default().fg(th.subtext0)),
        Span::styled(next, button(can_next)),
        Span::raw("  "),
        Span::styled(size.clone(), Style::default().fg(th.crust).bg(th.green)),
    ]);
    f.render_widget(Paragraph::new(line).style(Style::default().bg(th.base)), area);

    let width_of = |s: &str| u16::try_from(s.width()).unwrap_or(u16::MAX);
    let prev_x = area.x;
    let next_x = prev_x + width_of(prev) + width_of(&info);
    let size_x = next_x + width_of(next) + 2;
    app.pager_prev_rect = Some((prev_x, area.y, width_of(prev), 1));
    app.pager_next_rect = Some((next_x, area.y, width_of(next), 1));
    app.pager_size_rect = Some((size_x, area.y, width_of(&size), 1));
}
