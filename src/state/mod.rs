//! Application state split into the central container, overlay state and value types.
//!
//! Public re-exports keep callers on `crate::state::*`.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::{AppState, CellRect, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use modal::Modal;
pub use types::{
    CountryRecord, FetchOutcome, FetchRequest, Focus, Route, SortColumn,
    SortDirection,
};
