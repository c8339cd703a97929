//! Core non-UI logic: filtering, sorting, paging, selection and fetch coordination.
//!
//! Every function here operates on `AppState` (or plain records) without touching
//! the terminal, so event handlers and tests share the same code paths.

pub mod fetch;
pub mod filter;
pub mod paging;
pub mod search;
pub mod selection;
pub mod sort;

pub use fetch::{apply_fetch_outcome, ensure_loaded, request_fetch};
pub use filter::{apply_filter, filter_by_name};
pub use paging::{PageView, page_count, page_view};
pub use search::{clear_search, set_search_text};
pub use selection::{close_detail, open_cursor_record, open_record};
pub use sort::{request_sort, sorted_rows};
