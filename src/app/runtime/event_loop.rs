use ratatui::{Terminal, backend::Backend};
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Process one iteration of channel message handling.
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Fetch answers are polled first so a result that has already landed is applied before
///   a pending quit or a closed event channel ends the loop.
/// - A closed event channel means no more input can arrive and ends the loop.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        biased;
        Some(outcome) = channels.fetch_res_rx.recv() => {
            crate::logic::apply_fetch_outcome(app, outcome);
            false
        }
        ev = channels.event_rx.recv() => match ev {
            Some(ev) => crate::events::handle_event(ev, app, &channels.fetch_req_tx),
            None => {
                tracing::debug!("event channel closed");
                true
            }
        },
    }
}

/// What: Draw, wait for the next message, apply it; repeat until a handler asks to exit.
///
/// Inputs:
/// - `terminal`: Target terminal, or `None` when running headless.
/// - `app`: Application state owned by the loop.
/// - `channels`: Runtime channels.
pub async fn run_event_loop<B: Backend>(
    terminal: &mut Option<Terminal<B>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
