use std::cmp::Ordering;

use crate::state::{AppState, CountryRecord, SortColumn, SortDirection};

/// What: Compare two records by the value in `column`, ascending.
///
/// Details:
/// - Strings compare lexicographically by code point, exactly as stored.
/// - Alternate names compare element by element, then by length.
#[must_use]
pub fn compare_by(a: &CountryRecord, b: &CountryRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Flag => a.flag_url.cmp(&b.flag_url),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Cca2 => a.cca2.cmp(&b.cca2),
        SortColumn::Cca3 => a.cca3.cmp(&b.cca3),
        SortColumn::NativeName => a.native_name.cmp(&b.native_name),
        SortColumn::AlternateNames => a.alternate_names.cmp(&b.alternate_names),
        SortColumn::CallingCode => a.calling_code.cmp(&b.calling_code),
    }
}

/// What: Return `rows` ordered by `column` in `direction`.
///
/// Inputs:
/// - `rows`: Filtered view; not modified.
///
/// Output:
/// - References into `rows`. The sort is stable, so equal keys keep their input order
///   in both directions.
#[must_use]
pub fn sorted_rows(
    rows: &[CountryRecord],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<&CountryRecord> {
    let mut out: Vec<&CountryRecord> = rows.iter().collect();
    match direction {
        SortDirection::Ascending => out.sort_by(|a, b| compare_by(a, b, column)),
        SortDirection::Descending => out.sort_by(|a, b| compare_by(b, a, column)),
    }
    out
}

/// What: Compute the sort state produced by a header click.
///
/// Inputs:
/// - `active`/`direction`: Current sort state.
/// - `clicked`: Column whose header was activated.
///
/// Output:
/// - `(column, direction)`: clicking the active ascending column flips it to descending;
///   anything else selects `clicked` ascending.
#[must_use]
pub fn next_sort(
    active: SortColumn,
    direction: SortDirection,
    clicked: SortColumn,
) -> (SortColumn, SortDirection) {
    let is_asc = active == clicked && direction == SortDirection::Ascending;
    let dir = if is_asc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    (clicked, dir)
}

/// What: Apply a header click to `app` and keep the highlighted country when possible.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `column`: Column to sort by.
///
/// Details:
/// - The page index is kept. If the highlighted country is still on that page the cursor
///   follows it by `cca3`; otherwise the cursor is clamped.
pub fn request_sort(app: &mut AppState, column: SortColumn) {
    let prev_key = crate::logic::paging::cursor_record(app).map(|r| r.key().to_string());
    let (col, dir) = next_sort(app.sort_column, app.sort_direction, column);
    app.sort_column = col;
    app.sort_direction = dir;
    tracing::debug!(column = col.as_config_key(), direction = ?dir, "sort changed");
    let view = crate::logic::paging::page_view(app);
    let pos = prev_key.and_then(|k| view.rows.iter().position(|r| r.key() == k));
    let cursor = pos.unwrap_or_else(|| app.cursor.min(view.rows.len().saturating_sub(1)));
    app.set_cursor(cursor);
}
