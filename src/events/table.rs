use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::paging::{cycle_page_size, move_cursor, next_page, prev_page};
use crate::state::{AppState, Focus, Route, SortColumn};

/// What: Handle a key while the table has focus.
///
/// Output:
/// - `true` when `q` requests exit.
///
/// Details:
/// - Up/Down (`k`/`j`) move the cursor and cross page boundaries.
/// - Left/Right and PageUp/PageDown change page; `+`/`-` cycle rows per page.
/// - `1`..`7` sort by the column at that position; `Enter`, `v` or Space open the cursor row.
pub(super) fn handle_table_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, 1),
        KeyCode::Left | KeyCode::PageUp => prev_page(app),
        KeyCode::Right | KeyCode::PageDown => next_page(app),
        KeyCode::Char('+' | '=') => cycle_page_size(app, true),
        KeyCode::Char('-') => cycle_page_size(app, false),
        KeyCode::Enter | KeyCode::Char('v' | ' ') => crate::logic::open_cursor_record(app),
        KeyCode::Char('/') | KeyCode::Esc | KeyCode::Tab => app.focus = Focus::Search,
        KeyCode::Char('a') => app.route = Route::About,
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(col) = SortColumn::from_digit(ch) {
                crate::logic::request_sort(app, col);
            }
        }
        _ => {}
    }
    false
}
