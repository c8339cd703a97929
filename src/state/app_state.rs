//! Central `AppState` container shared by the event, fetch, and UI layers.

use ratatui::widgets::TableState;

use crate::state::modal::Modal;
use crate::state::types::{CountryRecord, Focus, Route, SortColumn, SortDirection};

/// Rows-per-page choices offered by the pager.
pub const PAGE_SIZE_OPTIONS: [usize; 6] = [5, 10, 25, 50, 75, 100];

/// Rows per page used when no setting overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Clickable rectangle in terminal cells: `(x, y, width, height)`.
pub type CellRect = (u16, u16, u16, u16);

/// Global application state.
///
/// Owned by the event loop. Background workers never touch it directly; they
/// send messages that handlers apply here.
#[derive(Debug)]
pub struct AppState {
    /// Screen selected in the header navigation.
    pub route: Route,
    /// Pane receiving keyboard input.
    pub focus: Focus,
    /// Active overlay.
    pub modal: Modal,
    /// Current search text. The only copy of it in the application.
    pub input: String,
    /// Full list from the last applied fetch, in response order.
    pub countries: Vec<CountryRecord>,
    /// Filtered view of `countries` for the current `input`.
    pub results: Vec<CountryRecord>,
    /// Record shown by the detail overlay; `None` renders "No data available".
    pub detail: Option<CountryRecord>,

    // Table presentation
    /// Column the table is sorted by.
    pub sort_column: SortColumn,
    /// Direction applied to `sort_column`.
    pub sort_direction: SortDirection,
    /// Zero-based page index.
    pub page: usize,
    /// Rows per page; one of [`PAGE_SIZE_OPTIONS`].
    pub page_size: usize,
    /// Highlighted row within the visible page.
    pub cursor: usize,
    /// Ratatui selection state mirroring `cursor`.
    pub table_state: TableState,

    // Fetch coordination
    /// Next fetch token to allocate.
    pub next_fetch_id: u64,
    /// Token of the most recently requested fetch; older answers are dropped.
    pub latest_fetch_id: u64,
    /// Whether a fetch for `latest_fetch_id` is still pending.
    pub fetch_in_flight: bool,

    /// Show the key-hint footer.
    pub show_footer: bool,

    // Clickable regions recorded during render
    /// Header navigation tabs.
    pub nav_rects: Vec<(Route, CellRect)>,
    /// Search field.
    pub search_rect: Option<CellRect>,
    /// Sortable header cells.
    pub header_rects: Vec<(SortColumn, CellRect)>,
    /// Horizontal span `(x, width)` of the name column.
    pub name_col_span: Option<(u16, u16)>,
    /// Horizontal span `(x, width)` of the View column.
    pub view_col_span: Option<(u16, u16)>,
    /// Visible rows as `(record id, index on the page, y)`.
    pub row_rects: Vec<(usize, usize, u16)>,
    /// Pager "previous" button.
    pub pager_prev_rect: Option<CellRect>,
    /// Pager "next" button.
    pub pager_next_rect: Option<CellRect>,
    /// Pager rows-per-page selector.
    pub pager_size_rect: Option<CellRect>,
    /// Detail overlay box.
    pub modal_rect: Option<CellRect>,
    /// Detail overlay close button.
    pub modal_close_rect: Option<CellRect>,
}

impl Default for AppState {
    /// What: Construct an empty [`AppState`] with the documented table defaults.
    ///
    /// Output:
    /// - Sorted by name descending, first page, 25 rows per page, search focused.
    fn default() -> Self {
        Self {
            route: Route::Home,
            focus: Focus::Search,
            modal: Modal::None,
            input: String::new(),
            countries: Vec::new(),
            results: Vec::new(),
            detail: None,
            sort_column: SortColumn::Name,
            sort_direction: SortDirection::Descending,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            cursor: 0,
            table_state: TableState::default(),
            next_fetch_id: 1,
            latest_fetch_id: 0,
            fetch_in_flight: false,
            show_footer: true,
            nav_rects: Vec::new(),
            search_rect: None,
            header_rects: Vec::new(),
            name_col_span: None,
            view_col_span: None,
            row_rects: Vec::new(),
            pager_prev_rect: None,
            pager_next_rect: None,
            pager_size_rect: None,
            modal_rect: None,
            modal_close_rect: None,
        }
    }
}

impl AppState {
    /// What: Apply user settings to a fresh state.
    ///
    /// Inputs:
    /// - `settings`: Parsed configuration.
    ///
    /// Details:
    /// - Page sizes outside [`PAGE_SIZE_OPTIONS`] are ignored (normalization already
    ///   rejects them, this is only reached by hand-built settings).
    pub fn apply_settings(&mut self, settings: &crate::theme::Settings) {
        if PAGE_SIZE_OPTIONS.contains(&settings.page_size) {
            self.page_size = settings.page_size;
        }
        self.sort_column = settings.sort_column;
        self.sort_direction = settings.sort_direction;
        self.show_footer = settings.show_footer;
    }

    /// Move the highlighted row and keep `table_state` in sync.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.table_state.select(Some(cursor));
    }
}
