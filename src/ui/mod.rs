//! Rendering for the countrydir TUI.
//!
//! `ui` draws one frame from `AppState` and records the clickable regions the
//! mouse handler reads on the next event.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, Route};
use crate::theme::theme;

pub mod about;
pub mod chrome;
pub mod helpers;
pub mod modals;
pub mod search;
pub mod table;

/// What: Render a full frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; clickable rects are rebuilt every frame.
///
/// Details:
/// - Home: header, search field, table, pager, footer. About: header, body, footer.
/// - The active overlay is drawn last, over everything else.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);
    clear_click_regions(app);

    let footer_h = u16::from(app.show_footer);
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(footer_h),
    ])
    .areas(area);

    chrome::render_header(f, app, header);
    match app.route {
        Route::Home => {
            let [search_area, table_area, pager_area] = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(body);
            search::render_search(f, app, search_area);
            table::render_table(f, app, table_area);
            table::render_pager(f, app, pager_area);
        }
        Route::About => about::render_about(f, body),
    }
    if app.show_footer {
        chrome::render_footer(f, app, footer);
    }
    modals::render_modals(f, app, area);
}

/// Forget the rects of the previous frame so hidden widgets cannot be clicked.
fn clear_click_regions(app: &mut AppState) {
    app.nav_rects.clear();
    app.search_rect = None;
    app.header_rects.clear();
    app.name_col_span = None;
    app.view_col_span = None;
    app.row_rects.clear();
    app.pager_prev_rect = None;
    app.pager_next_rect = None;
    app.pager_size_rect = None;
    app.modal_rect = None;
    app.modal_close_rect = None;
}
