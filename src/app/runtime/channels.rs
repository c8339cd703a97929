use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{FetchOutcome, FetchRequest};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - The event loop owns every receiver except `fetch_req_rx`, which is handed to the
///   fetch worker on spawn.
/// - The event sender lives with whoever produces events (the reader thread or a test);
///   when every sender is gone the event loop ends.
pub struct Channels {
    /// Terminal events polled by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on shutdown to stop the reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests from handlers to the fetch worker.
    pub fetch_req_tx: mpsc::UnboundedSender<FetchRequest>,
    /// Taken by the fetch worker.
    pub fetch_req_rx: Option<mpsc::UnboundedReceiver<FetchRequest>>,
    /// Answers from the fetch worker.
    pub fetch_res_tx: mpsc::UnboundedSender<FetchOutcome>,
    /// Receiving end polled by the event loop.
    pub fetch_res_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl Channels {
    /// Create the fetch channel pairs around an existing event receiver.
    pub fn new(event_rx: mpsc::UnboundedReceiver<CEvent>) -> Self {
        let (fetch_req_tx, fetch_req_rx) = mpsc::unbounded_channel::<FetchRequest>();
        let (fetch_res_tx, fetch_res_rx) = mpsc::unbounded_channel::<FetchOutcome>();
        Self {
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            fetch_req_tx,
            fetch_req_rx: Some(fetch_req_rx),
            fetch_res_tx,
            fetch_res_rx,
        }
    }
}
