use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::search::{clear_search, pop_char, push_char};
use crate::state::{AppState, FetchRequest, Focus};

/// What: Handle a key while the search field has focus.
///
/// Details:
/// - Printable characters edit the text; `Esc` clears it.
/// - `Enter`, `Down` and `Tab` hand focus to the table.
pub(super) fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    match ke.code {
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            push_char(app, ch, fetch_tx);
        }
        KeyCode::Backspace => pop_char(app, fetch_tx),
        KeyCode::Esc => clear_search(app, fetch_tx),
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            app.focus = Focus::Table;
            app.set_cursor(app.cursor);
        }
        _ => {}
    }
    false
}
