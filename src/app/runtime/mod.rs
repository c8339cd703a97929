use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::sources::ApiClient;
use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
mod workers;

pub use channels::Channels;
pub use event_loop::run_event_loop;
pub use workers::{run_fetch, spawn_event_thread, spawn_fetch_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Inputs to one application session.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Effective settings after CLI overrides.
    pub settings: Settings,
    /// Skip terminal setup and drawing.
    pub headless: bool,
    /// Event source to use instead of the terminal reader thread.
    pub events: Option<mpsc::UnboundedReceiver<CEvent>>,
}

/// What: Run the countrydir TUI end-to-end: initialize terminal and state, spawn the
/// event reader and fetch worker, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `options`: Settings, headless flag and optional event source.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup or configuration errors.
pub async fn run(options: RunOptions) -> Result<()> {
    run_session(options).await.map(|_| ())
}

/// What: Same as [`run`] but hands back the final state.
///
/// Details:
/// - Requests the full list before the first frame.
/// - The loop ends on a quit key or when the event source closes.
/// - Shutdown stops the reader thread before the terminal is restored.
pub async fn run_session(options: RunOptions) -> Result<AppState> {
    let RunOptions {
        settings,
        headless,
        events,
    } = options;
    let client = ApiClient::new(&settings.api_base_url)?;
    tracing::info!(base_url = client.base_url(), headless, "starting session");

    let (reader_tx, event_rx) = match events {
        Some(rx) => (None, rx),
        None => {
            let (tx, rx) = mpsc::unbounded_channel();
            (Some(tx), rx)
        }
    };
    let mut channels = Channels::new(event_rx);
    if let Some(tx) = reader_tx {
        spawn_event_thread(tx, channels.event_thread_cancelled.clone());
    }
    if let Some(req_rx) = channels.fetch_req_rx.take() {
        spawn_fetch_worker(client, req_rx, channels.fetch_res_tx.clone());
    }

    let mut app = AppState::default();
    app.apply_settings(&settings);

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    crate::logic::ensure_loaded(&mut app, &channels.fetch_req_tx);
    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    tracing::info!(countries = app.countries.len(), "session ended");
    Ok(app)
}
