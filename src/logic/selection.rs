use crate::state::{AppState, Modal};

/// What: Open the detail overlay for the record with positional id `id`.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `id`: Row id from the table. `None` means no row was supplied; `Some(0)` is a
///   valid id like any other.
///
/// Details:
/// - Looks the id up in the full list, not the filtered view, so filtering never changes
///   which country an id refers to.
/// - An id that is not in the list opens the overlay without a record, which renders
///   "No data available".
pub fn open_record(app: &mut AppState, id: Option<usize>) {
    let Some(id) = id else {
        tracing::debug!("open requested without a row id; ignoring");
        return;
    };
    app.detail = app.countries.iter().find(|c| c.id == id).cloned();
    if app.detail.is_none() {
        tracing::warn!(id, "no country with this id in the current list");
    }
    app.modal = Modal::CountryDetail;
}

/// Open the overlay for the row under the table cursor.
pub fn open_cursor_record(app: &mut AppState) {
    let id = crate::logic::paging::cursor_record(app).map(|r| r.id);
    open_record(app, id);
}

/// What: Close the detail overlay and forget the selected record.
pub fn close_detail(app: &mut AppState) {
    app.modal = Modal::None;
    app.detail = None;
}
