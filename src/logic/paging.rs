//! Pagination over the sorted filtered view.

use crate::state::{AppState, CountryRecord, PAGE_SIZE_OPTIONS};

/// One rendered page of the table.
#[derive(Debug)]
pub struct PageView<'a> {
    /// Rows on the current page, already sorted.
    pub rows: Vec<&'a CountryRecord>,
    /// Blank rows appended so a short page keeps the height of a full one.
    pub padding: usize,
    /// Total number of pages for the filtered view.
    pub page_count: usize,
    /// Number of rows in the filtered view.
    pub total: usize,
    /// Index of the first visible row within the sorted view.
    pub start: usize,
}

/// What: Number of pages needed for `total` rows at `page_size` rows per page.
///
/// Output:
/// - `ceil(total / page_size)`; zero rows need zero pages.
#[must_use]
pub const fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// What: Slice `sorted` to page `page`.
///
/// Output:
/// - `(rows, padding)`. Padding fills the remainder of the page with blanks only when the
///   page is short and the view spans more than one page.
#[must_use]
pub fn slice_page<'a>(
    sorted: &[&'a CountryRecord],
    page: usize,
    page_size: usize,
) -> (Vec<&'a CountryRecord>, usize) {
    let start = page.saturating_mul(page_size).min(sorted.len());
    let end = start.saturating_add(page_size).min(sorted.len());
    let rows = sorted[start..end].to_vec();
    let padding = if page_count(sorted.len(), page_size) > 1 {
        page_size.saturating_sub(rows.len())
    } else {
        0
    };
    (rows, padding)
}

/// What: Build the current page from `app`'s filtered view and sort state.
///
/// Details:
/// - Sorting and slicing run on every call; the view is small enough that nothing is
///   cached between renders.
#[must_use]
pub fn page_view(app: &AppState) -> PageView<'_> {
    let sorted = crate::logic::sort::sorted_rows(&app.results, app.sort_column, app.sort_direction);
    let (rows, padding) = slice_page(&sorted, app.page, app.page_size);
    PageView {
        rows,
        padding,
        page_count: page_count(app.results.len(), app.page_size),
        total: app.results.len(),
        start: app.page.saturating_mul(app.page_size),
    }
}

/// Record under the table cursor, if the page has one.
#[must_use]
pub fn cursor_record(app: &AppState) -> Option<&CountryRecord> {
    page_view(app).rows.get(app.cursor).copied()
}

/// What: Keep `page` and `cursor` inside the current view.
pub fn clamp_page(app: &mut AppState) {
    let pages = page_count(app.results.len(), app.page_size);
    if app.page >= pages {
        app.page = pages.saturating_sub(1);
    }
    let on_page = page_view(app).rows.len();
    app.set_cursor(app.cursor.min(on_page.saturating_sub(1)));
}

/// Jump to page `page` (clamped) with the cursor on its first row.
pub fn set_page(app: &mut AppState, page: usize) {
    app.page = page;
    app.set_cursor(0);
    clamp_page(app);
}

/// Advance one page if there is one.
pub fn next_page(app: &mut AppState) {
    if app.page + 1 < page_count(app.results.len(), app.page_size) {
        set_page(app, app.page + 1);
    }
}

/// Go back one page if not on the first.
pub fn prev_page(app: &mut AppState) {
    if app.page > 0 {
        set_page(app, app.page - 1);
    }
}

/// What: Change the rows-per-page and go back to the first page.
///
/// Details:
/// - Values outside [`PAGE_SIZE_OPTIONS`] are ignored.
pub fn set_page_size(app: &mut AppState, size: usize) {
    if !PAGE_SIZE_OPTIONS.contains(&size) {
        tracing::debug!(size, "ignoring unsupported page size");
        return;
    }
    app.page_size = size;
    set_page(app, 0);
}

/// What: Step to the next (or previous) entry of [`PAGE_SIZE_OPTIONS`], wrapping around.
pub fn cycle_page_size(app: &mut AppState, forward: bool) {
    let n = PAGE_SIZE_OPTIONS.len();
    let idx = PAGE_SIZE_OPTIONS
        .iter()
        .position(|s| *s == app.page_size)
        .unwrap_or(0);
    let next = if forward { (idx + 1) % n } else { (idx + n - 1) % n };
    set_page_size(app, PAGE_SIZE_OPTIONS[next]);
}

/// What: Move the cursor by `delta` rows, crossing page boundaries.
///
/// Details:
/// - Moving past the last row of a page opens the next page at its first row, and
///   moving above the first row opens the previous page at its last row.
pub fn move_cursor(app: &mut AppState, delta: isize) {
    let on_page = page_view(app).rows.len();
    if on_page == 0 {
        return;
    }
    let target = if delta < 0 {
        app.cursor.checked_sub(delta.unsigned_abs())
    } else {
        Some(app.cursor.saturating_add(delta.unsigned_abs()))
    };
    match target {
        None if app.page > 0 => {
            app.page -= 1;
            let last = page_view(app).rows.len().saturating_sub(1);
            app.set_cursor(last);
        }
        None => app.set_cursor(0),
        Some(t) if t >= on_page => {
            if app.page + 1 < page_count(app.results.len(), app.page_size) {
                set_page(app, app.page + 1);
            } else {
                app.set_cursor(on_page - 1);
            }
        }
        Some(t) => app.set_cursor(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recs(n: usize) -> Vec<CountryRecord> {
        (0..n)
            .map(|i| CountryRecord {
                id: i,
                name: format!("Country {i:03}"),
                cca3: format!("C{i:02}"),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    /// What: Page count is the ceiling of rows over page size.
    fn page_count_is_ceiling() {
        assert_eq!(page_count(0, 25), 0);
        assert_eq!(page_count(1, 25), 1);
        assert_eq!(page_count(25, 25), 1);
        assert_eq!(page_count(26, 25), 2);
        assert_eq!(page_count(250, 100), 3);
        assert_eq!(page_count(10, 0), 0);
    }

    #[test]
    /// What: Concatenating all pages reproduces the sorted view exactly once.
    ///
    /// - Input: Row counts 0..=23 and every page size option
    /// - Output: Page count equals ceil(n/p); visible rows concatenate to the sorted ids
    fn pages_concatenate_to_sorted_view() {
        for n in 0..=23 {
            let rows = recs(n);
            for p in PAGE_SIZE_OPTIONS {
                let mut app = AppState {
                    results: rows.clone(),
                    page_size: p,
                    ..Default::default()
                };
                let sorted: Vec<usize> = crate::logic::sort::sorted_rows(
                    &app.results,
                    app.sort_column,
                    app.sort_direction,
                )
                .iter()
                .map(|r| r.id)
                .collect();
                let pages = page_count(n, p);
                assert_eq!(pages, n.div_ceil(p));
                let mut seen = Vec::new();
                for page in 0..pages {
                    app.page = page;
                    let view = page_view(&app);
                    assert!(view.rows.len() + view.padding <= p);
                    seen.extend(view.rows.iter().map(|r| r.id));
                }
                assert_eq!(seen, sorted, "n={n} p={p}");
            }
        }
    }

    #[test]
    /// What: Short last page is padded only when the view has several pages.
    fn padding_only_on_multi_page_views() {
        let rows = recs(7);
        let sorted: Vec<&CountryRecord> = rows.iter().collect();
        assert_eq!(slice_page(&sorted, 0, 5).1, 0);
        assert_eq!(slice_page(&sorted, 1, 5), (sorted[5..7].to_vec(), 3));
        assert_eq!(slice_page(&sorted, 0, 10).1, 0);
    }

    #[test]
    /// What: Changing the page size resets to page 0; unsupported sizes are ignored.
    fn set_page_size_resets_page() {
        let mut app = AppState {
            results: recs(60),
            ..Default::default()
        };
        next_page(&mut app);
        assert_eq!(app.page, 1);
        set_page_size(&mut app, 10);
        assert_eq!((app.page, app.page_size), (0, 10));
        set_page_size(&mut app, 11);
        assert_eq!(app.page_size, 10);
        cycle_page_size(&mut app, true);
        assert_eq!(app.page_size, 25);
        cycle_page_size(&mut app, false);
        cycle_page_size(&mut app, false);
        assert_eq!(app.page_size, 5);
        cycle_page_size(&mut app, false);
        assert_eq!(app.page_size, 100);
    }

    #[test]
    /// What: Cursor movement crosses page boundaries in both directions.
    fn move_cursor_crosses_pages() {
        let mut app = AppState {
            results: recs(12),
            page_size: 5,
            ..Default::default()
        };
        move_cursor(&mut app, 4);
        assert_eq!((app.page, app.cursor), (0, 4));
        move_cursor(&mut app, 1);
        assert_eq!((app.page, app.cursor), (1, 0));
        move_cursor(&mut app, -1);
        assert_eq!((app.page, app.cursor), (0, 4));
        set_page(&mut app, 2);
        move_cursor(&mut app, 10);
        assert_eq!((app.page, app.cursor), (2, 1));
        prev_page(&mut app);
        prev_page(&mut app);
        prev_page(&mut app);
        assert_eq!(app.page, 0);
    }

    #[test]
    /// What: Clamping after the view shrinks keeps page and cursor in range.
    fn clamp_page_after_shrink() {
        let mut app = AppState {
            results: recs(30),
            page_size: 10,
            page: 2,
            ..Default::default()
        };
        app.set_cursor(9);
        app.results.truncate(13);
        clamp_page(&mut app);
        assert_eq!((app.page, app.cursor), (1, 2));
        app.results.clear();
        clamp_page(&mut app);
        assert_eq!((app.page, app.cursor), (0, 0));
    }
}
