//! Event handling layer for the countrydir TUI.
//!
//! `handle_event` applies modal-first dispatch, then global shortcuts, then the
//! keys of the focused pane. Mouse events are delegated to [`mouse`].

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, FetchRequest, Focus, Modal, Route};

mod mouse;
mod search;
mod table;
mod utils;

pub use mouse::handle_mouse_event;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) => handle_key_event(ke, app, fetch_tx),
        CEvent::Mouse(m) => handle_mouse_event(m, app),
        _ => false,
    }
}

/// What: Handle one key press.
///
/// Inputs:
/// - `ke`: Key event; releases and repeats from enhanced keyboards are ignored.
/// - `app`: Mutable application state.
/// - `fetch_tx`: Channel to the fetch worker for refreshes and search-triggered loads.
///
/// Output:
/// - `true` when the key requests exit.
///
/// Details:
/// - Open overlays consume every key except `Ctrl+C`.
fn handle_key_event(
    ke: KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(ke.code, KeyCode::Char('c' | 'C')) {
        return true;
    }

    match app.modal {
        Modal::CountryDetail => {
            if matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                crate::logic::close_detail(app);
            }
            return false;
        }
        Modal::Help => {
            if matches!(
                ke.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::F(1)
            ) {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::None => {}
    }

    // Global shortcuts
    if ctrl && matches!(ke.code, KeyCode::Char('r' | 'R')) {
        tracing::info!("refresh requested");
        crate::logic::request_fetch(app, fetch_tx);
        return false;
    }
    if matches!(ke.code, KeyCode::Char('?') | KeyCode::F(1)) {
        app.modal = Modal::Help;
        return false;
    }
    if ke.code == KeyCode::BackTab {
        app.route = match app.route {
            Route::Home => Route::About,
            Route::About => Route::Home,
        };
        return false;
    }

    match app.route {
        Route::About => handle_about_key(ke, app),
        Route::Home => match app.focus {
            Focus::Search => search::handle_search_key(ke, app, fetch_tx),
            Focus::Table => table::handle_table_key(ke, app),
        },
    }
}

/// Keys on the About screen: back to Home or quit.
fn handle_about_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => app.route = Route::Home,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CountryRecord;

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn ctrl(ch: char) -> CEvent {
        CEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
    }

    fn loaded_app() -> AppState {
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
        app
    }

    #[test]
    /// What: `Ctrl+C` exits from anywhere, even with an overlay open.
    fn ctrl_c_exits_everywhere() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        assert!(handle_event(ctrl('c'), &mut app, &tx));
        app.modal = Modal::CountryDetail;
        assert!(handle_event(ctrl('c'), &mut app, &tx));
    }

    #[test]
    /// What: Typing in the search field filters; `Esc` clears; `Enter` moves to the table.
    ///
    /// - Input: "fra", Esc, Enter
    /// - Output: One result after typing, both after Esc, table focused after Enter
    fn search_typing_clear_and_focus_table() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app();
        for ch in "fra".chars() {
            assert!(!handle_event(key(KeyCode::Char(ch)), &mut app, &tx));
        }
        assert_eq!(app.input, "fra");
        assert_eq!(app.results.len(), 1);
        handle_event(key(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.input, "");
        assert_eq!(app.results.len(), 2);
        handle_event(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.focus, Focus::Table);
    }

    #[test]
    /// What: `Enter` on a table row opens the overlay; `Esc` closes and clears it.
    fn enter_opens_and_esc_closes_detail() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app();
        app.focus = Focus::Table;
        // Name descending puts Thailand (id 0) first.
        handle_event(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.modal, Modal::CountryDetail);
        assert_eq!(app.detail.as_ref().map(|d| d.id), Some(0));
        // Keys other than close are swallowed by the overlay.
        handle_event(key(KeyCode::Down), &mut app, &tx);
        assert_eq!(app.cursor, 0);
        handle_event(key(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.modal, Modal::None);
        assert!(app.detail.is_none());
    }

    #[test]
    /// What: `Ctrl+R` sends a new fetch request with a fresh token.
    fn ctrl_r_requests_refresh() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = loaded_app();
        handle_event(ctrl('r'), &mut app, &tx);
        let req = rx.try_recv().expect("refresh request");
        assert_eq!(req, FetchRequest { id: app.latest_fetch_id });
    }

    #[test]
    /// What: `?` opens help from both panes and `Esc` closes it.
    fn help_overlay_toggles() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app();
        handle_event(key(KeyCode::Char('?')), &mut app, &tx);
        assert_eq!(app.modal, Modal::Help);
        assert_eq!(app.input, "");
        handle_event(key(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: `Shift+Tab` cycles routes; About handles its own back and quit keys.
    fn route_switching() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app();
        handle_event(key(KeyCode::BackTab), &mut app, &tx);
        assert_eq!(app.route, Route::About);
        handle_event(key(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.route, Route::Home);
        app.route = Route::About;
        assert!(handle_event(key(KeyCode::Char('q')), &mut app, &tx));
    }

    #[test]
    /// What: Key releases are ignored.
    fn key_release_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app();
        let mut ke = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty());
        ke.kind = KeyEventKind::Release;
        handle_event(CEvent::Key(ke), &mut app, &tx);
        assert_eq!(app.input, "");
    }
}
