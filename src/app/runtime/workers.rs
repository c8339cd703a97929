use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{self, ApiClient};
use crate::state::{FetchOutcome, FetchRequest};

/// What: Spawn the background worker that serves fetch requests.
///
/// Inputs:
/// - `client`: Configured API client, cloned into each request task.
/// - `req_rx`: Requests from the event loop.
/// - `res_tx`: Answers back to the event loop.
///
/// Details:
/// - Each request runs in its own task, so answers may arrive out of order; the event
///   loop drops stale ones by token.
/// - Errors are turned into text here; nothing is retried.
pub fn spawn_fetch_worker(
    client: ApiClient,
    mut req_rx: mpsc::UnboundedReceiver<FetchRequest>,
    res_tx: mpsc::UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let client = client.clone();
            let tx = res_tx.clone();
            tokio::spawn(async move {
                let outcome = run_fetch(&client, req).await;
                let _ = tx.send(outcome);
            });
        }
        tracing::debug!("fetch worker stopped");
    });
}

/// What: Execute one fetch request and map its records.
pub async fn run_fetch(client: &ApiClient, req: FetchRequest) -> FetchOutcome {
    let result = sources::fetch_all(client)
        .await
        .map(sources::map_records)
        .map_err(|e| e.to_string());
    FetchOutcome { id: req.id, result }
}

/// What: Spawn the OS thread that forwards crossterm events into `event_tx`.
///
/// Details:
/// - Polls with a short timeout so `cancelled` is noticed promptly on exit.
/// - Stops when the receiver is dropped.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal event read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "terminal event poll failed"),
            }
        }
    });
}
