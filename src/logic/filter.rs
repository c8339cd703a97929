use crate::state::{AppState, CountryRecord};

/// What: Keep the records whose official name contains `query`, ignoring case.
///
/// Inputs:
/// - `records`: Source list; left untouched.
/// - `query`: Raw search text.
///
/// Output:
/// - New list in source order. An empty `query` keeps every record.
#[must_use]
pub fn filter_by_name(records: &[CountryRecord], query: &str) -> Vec<CountryRecord> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// What: Recompute `app.results` from `app.countries` and `app.input`.
///
/// Details:
/// - Clamps the page and cursor so they stay inside the new view.
pub fn apply_filter(app: &mut AppState) {
    app.results = filter_by_name(&app.countries, &app.input);
    crate::logic::paging::clamp_page(app);
}
