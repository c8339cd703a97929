use tokio::sync::mpsc;

use crate::state::{AppState, FetchOutcome, FetchRequest};

/// What: Ask the fetch worker for the full list under a fresh token.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_fetch_id`, `latest_fetch_id` and
///   `fetch_in_flight`.
/// - `fetch_tx`: Channel to the fetch worker.
///
/// Details:
/// - The token lets [`apply_fetch_outcome`] drop answers to superseded requests, so the
///   last request wins no matter which answer arrives first.
pub fn request_fetch(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let id = app.next_fetch_id;
    app.next_fetch_id += 1;
    app.latest_fetch_id = id;
    app.fetch_in_flight = true;
    tracing::debug!(id, "requesting country fetch");
    if fetch_tx.send(FetchRequest { id }).is_err() {
        tracing::warn!(id, "fetch worker is gone; request dropped");
        app.fetch_in_flight = false;
    }
}

/// What: Request the full list if nothing is loaded and nothing is pending.
///
/// Details:
/// - Called on start and after every search change, so a failed first fetch is retried
///   by the next keystroke.
pub fn ensure_loaded(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    if app.countries.is_empty() && !app.fetch_in_flight {
        request_fetch(app, fetch_tx);
    }
}

/// What: Apply a worker answer to `app`.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `outcome`: Tagged answer from the fetch worker.
///
/// Output:
/// - `true` when the answer was current and applied (successfully or not); `false` when
///   it was stale and dropped.
///
/// Details:
/// - Success replaces the full list, recomputes the filtered view and keeps the cursor on
///   the same country (by `cca3`) when it is still on the page.
/// - Failure is logged only; the list keeps whatever it held before.
pub fn apply_fetch_outcome(app: &mut AppState, outcome: FetchOutcome) -> bool {
    if outcome.id != app.latest_fetch_id {
        tracing::debug!(
            id = outcome.id,
            latest = app.latest_fetch_id,
            "discarding stale fetch result"
        );
        return false;
    }
    app.fetch_in_flight = false;
    match outcome.result {
        Ok(records) => {
            let prev_key = crate::logic::paging::cursor_record(app).map(|r| r.key().to_string());
            tracing::info!(id = outcome.id, count = records.len(), "country list loaded");
            app.countries = records;
            crate::logic::filter::apply_filter(app);
            let pos = prev_key.and_then(|k| {
                crate::logic::paging::page_view(app)
                    .rows
                    .iter()
                    .position(|r| r.key() == k)
            });
            if let Some(pos) = pos {
                app.set_cursor(pos);
            }
        }
        Err(e) => {
            tracing::error!(id = outcome.id, error = %e, "error fetching countries");
        }
    }
    true
}
