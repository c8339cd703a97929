//! countrydir application module: terminal lifecycle, runtime and background workers.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{Channels, RunOptions, run, run_event_loop, run_fetch, run_session};
