//! Mouse handling against the rectangles recorded during the last render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::utils::{in_span, point_in};
use crate::logic::paging::{cycle_page_size, move_cursor, next_page, prev_page};
use crate::state::{AppState, Focus, Modal, Route};

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and button.
/// - `app`: Mutable application state holding the clickable rects of the last frame.
///
/// Output:
/// - Always `false`; the mouse never requests exit.
///
/// Details:
/// - Modal-first: an open overlay consumes every event. Clicking `[x]` or outside the box
///   closes it.
/// - Header tabs switch routes; header cells sort; the name and `View` cells open a row;
///   any other row cell moves the cursor there.
/// - Pager buttons change page or rows per page; the wheel moves the cursor.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) -> bool {
    let (mx, my) = (m.column, m.row);
    let is_left_down = matches!(m.kind, MouseEventKind::Down(MouseButton::Left));

    if app.modal.is_open() {
        if is_left_down {
            handle_modal_click(app, mx, my);
        }
        return false;
    }

    match m.kind {
        MouseEventKind::ScrollDown if app.route == Route::Home => move_cursor(app, 1),
        MouseEventKind::ScrollUp if app.route == Route::Home => move_cursor(app, -1),
        _ => {}
    }
    if !is_left_down {
        return false;
    }

    if let Some(route) = app
        .nav_rects
        .iter()
        .find(|(_, r)| point_in(*r, mx, my))
        .map(|(route, _)| *route)
    {
        app.route = route;
        return false;
    }
    if app.route != Route::Home {
        return false;
    }

    if app.search_rect.is_some_and(|r| point_in(r, mx, my)) {
        app.focus = Focus::Search;
        return false;
    }
    if let Some(col) = app
        .header_rects
        .iter()
        .find(|(_, r)| point_in(*r, mx, my))
        .map(|(col, _)| *col)
    {
        crate::logic::request_sort(app, col);
        return false;
    }
    if let Some((id, idx)) = app
        .row_rects
        .iter()
        .find(|(_, _, y)| *y == my)
        .map(|(id, idx, _)| (*id, *idx))
    {
        app.focus = Focus::Table;
        app.set_cursor(idx);
        if in_span(app.name_col_span, mx) || in_span(app.view_col_span, mx) {
            crate::logic::open_record(app, Some(id));
        }
        return false;
    }
    if app.pager_prev_rect.is_some_and(|r| point_in(r, mx, my)) {
        prev_page(app);
    } else if app.pager_next_rect.is_some_and(|r| point_in(r, mx, my)) {
        next_page(app);
    } else if app.pager_size_rect.is_some_and(|r| point_in(r, mx, my)) {
        cycle_page_size(app, true);
    }
    false
}

/// Close the open overlay on `[x]` or outside clicks; clicks inside the box are swallowed.
fn handle_modal_click(app: &mut AppState, mx: u16, my: u16) {
    let on_close = app.modal_close_rect.is_some_and(|r| point_in(r, mx, my));
    let inside = app.modal_rect.is_some_and(|r| point_in(r, mx, my));
    if on_close || !inside {
        match app.modal {
            Modal::CountryDetail => crate::logic::close_detail(app),
            Modal::Help | Modal::None => app.modal = Modal::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CountryRecord, SortColumn, SortDirection};
    use crossterm::event::KeyModifiers;

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// What: Provide state as the renderer would leave it for two visible rows.
    ///
    /// Details:
    /// - Row 0 (y = 5) holds id 0, row 1 (y = 6) holds id 1. Name spans x 10..30 and
    ///   View spans x 70..76.
    fn rendered_app() -> AppState {
        let mut app = AppState {
            countries: vec![
                CountryRecord {
                    id: 0,
                    name: "Thailand".into(),
                    cca3: "THA".into(),
                    ..Default::default()
                },
                CountryRecord {
                    id: 1,
                    name: "France".into(),
                    cca3: "FRA".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        crate::logic::apply_filter(&mut app);
        app.nav_rects = vec![(Route::Home, (0, 0, 6, 1)), (Route::About, (8, 0, 7, 1))];
        app.search_rect = Some((0, 1, 80, 3));
        app.header_rects = vec![(SortColumn::Name, (10, 4, 20, 1))];
        app.name_col_span = Some((10, 20));
        app.view_col_span = Some((70, 6));
        app.row_rects = vec![(0, 0, 5), (1, 1, 6)];
        app
    }

    #[test]
    /// What: Clicking the name cell of the row with id 0 opens that record.
    fn name_click_opens_id_zero() {
        let mut app = rendered_app();
        handle_mouse_event(click(12, 5), &mut app);
        assert_eq!(app.modal, Modal::CountryDetail);
        assert_eq!(app.detail.as_ref().map(|d| d.id), Some(0));
    }

    #[test]
    /// What: The View cell opens; other cells only move the cursor.
    fn view_click_opens_other_cells_select() {
        let mut app = rendered_app();
        handle_mouse_event(click(40, 6), &mut app);
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.focus, Focus::Table);
        handle_mouse_event(click(72, 6), &mut app);
        assert_eq!(app.detail.as_ref().map(|d| d.name.as_str()), Some("France"));
    }

    #[test]
    /// What: Outside clicks close the overlay; inside clicks do not.
    fn modal_outside_and_close_button() {
        let mut app = rendered_app();
        handle_mouse_event(click(12, 5), &mut app);
        app.modal_rect = Some((20, 5, 40, 12));
        app.modal_close_rect = Some((55, 5, 3, 1));
        handle_mouse_event(click(30, 8), &mut app);
        assert_eq!(app.modal, Modal::CountryDetail);
        handle_mouse_event(click(56, 5), &mut app);
        assert_eq!(app.modal, Modal::None);
        assert!(app.detail.is_none());

        handle_mouse_event(click(12, 5), &mut app);
        handle_mouse_event(click(1, 1), &mut app);
        assert!(app.detail.is_none());
        assert!(app.row_rects.iter().any(|(id, _, _)| *id == 0));
    }

    #[test]
    /// What: Header clicks sort and nav tabs switch routes.
    fn header_and_nav_clicks() {
        let mut app = rendered_app();
        handle_mouse_event(click(15, 4), &mut app);
        assert_eq!(app.sort_direction, SortDirection::Ascending);
        handle_mouse_event(click(9, 0), &mut app);
        assert_eq!(app.route, Route::About);
        handle_mouse_event(click(12, 5), &mut app);
        assert_eq!(app.modal, Modal::None, "table is inactive on About");
        handle_mouse_event(click(1, 0), &mut app);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    /// What: Clicking a row of a scrolled table puts the cursor on that row.
    ///
    /// - Input: 25 rows, cursor on row 20 so the table scrolls, click on the first visible row
    /// - Output: Cursor equals the scroll offset; opening the cursor row opens the clicked id
    ///
    /// Details:
    /// - Redrawing afterwards keeps the same scroll offset.
    fn row_click_in_scrolled_table_selects_that_row() {
        use ratatui::{Terminal, backend::TestBackend};

        let mut app = AppState {
            countries: (0..25)
                .map(|i| CountryRecord {
                    id: i,
                    name: format!("Country {i:03}"),
                    cca3: format!("C{i:02}"),
                    ..Default::default()
                })
                .collect(),
            focus: Focus::Table,
            ..Default::default()
        };
        crate::logic::apply_filter(&mut app);
        app.set_cursor(20);
        let mut term = Terminal::new(TestBackend::new(120, 14)).expect("terminal");
        term.draw(|f| crate::ui::table::render_table(f, &mut app, f.area()))
            .expect("draw");
        let offset = app.table_state.offset();
        assert!(offset > 0, "table is scrolled");

        let (clicked_id, page_idx, y) = app.row_rects[0];
        assert_eq!(page_idx, offset);
        let (cca2_x, _, _, _) = app
            .header_rects
            .iter()
            .find(|(col, _)| *col == SortColumn::Cca2)
            .map(|(_, r)| *r)
            .expect("cca2 header");
        handle_mouse_event(click(cca2_x, y), &mut app);
        assert_eq!(app.cursor, offset);
        assert_eq!(
            crate::logic::paging::cursor_record(&app).map(|r| r.id),
            Some(clicked_id)
        );

        term.draw(|f| crate::ui::table::render_table(f, &mut app, f.area()))
            .expect("redraw");
        assert_eq!(app.table_state.offset(), offset);

        crate::logic::open_cursor_record(&mut app);
        assert_eq!(app.detail.as_ref().map(|d| d.id), Some(clicked_id));
    }
}
