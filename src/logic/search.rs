use tokio::sync::mpsc;

use crate::state::{AppState, FetchRequest};

/// What: Replace the search text and refresh everything that depends on it.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `text`: New search text, forwarded as typed (no trimming).
/// - `fetch_tx`: Channel to the fetch worker, used when nothing is loaded yet.
///
/// Details:
/// - Resets the table to its first page, recomputes the filtered view and requests the
///   full list if it is still empty.
pub fn set_search_text(
    app: &mut AppState,
    text: String,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) {
    app.input = text;
    app.page = 0;
    app.set_cursor(0);
    crate::logic::filter::apply_filter(app);
    crate::logic::fetch::ensure_loaded(app, fetch_tx);
}

/// Append one typed character.
pub fn push_char(app: &mut AppState, ch: char, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let mut text = app.input.clone();
    text.push(ch);
    set_search_text(app, text, fetch_tx);
}

/// Delete the last character, if any.
pub fn pop_char(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let mut text = app.input.clone();
    if text.pop().is_some() {
        set_search_text(app, text, fetch_tx);
    }
}

/// Clear the search field.
pub fn clear_search(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    set_search_text(app, String::new(), fetch_tx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CountryRecord;

    #[test]
    /// What: Typing filters, resets the page, and clearing restores the full view.
    ///
    /// - Input: 30 countries on page 1 of 25; type "fr", then clear
    /// - Output: Page 0 after each change; results narrow then widen again
    fn typing_filters_and_resets_page() {
        let mut countries: Vec<CountryRecord> = (0..30)
            .map(|i| CountryRecord {
                id: i,
                name: format!("Country {i}"),
                cca3: format!("C{i:02}"),
                ..Default::default()
            })
            .collect();
        countries[7].name = "France".into();
        let mut app = AppState {
            countries,
            ..Default::default()
        };
        crate::logic::filter::apply_filter(&mut app);
        app.page = 1;
        let (tx, mut rx) = mpsc::unbounded_channel();
        push_char(&mut app, 'f', &tx);
        push_char(&mut app, 'R', &tx);
        assert_eq!(app.input, "fR");
        assert_eq!(app.page, 0);
        assert_eq!(app.results.len(), 1);
        pop_char(&mut app, &tx);
        assert_eq!(app.input, "f");
        clear_search(&mut app, &tx);
        assert_eq!(app.results.len(), 30);
        assert!(rx.try_recv().is_err(), "no fetch when data is present");
    }

    #[test]
    /// What: Typing while nothing is loaded requests the full list.
    fn typing_with_empty_list_requests_fetch() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        push_char(&mut app, 'a', &tx);
        assert!(rx.try_recv().is_ok());
        assert!(app.results.is_empty());
    }
}
