//! Headless runtime smoke tests.
//!
//! - Drives `countrydir::app::run_session` and the event loop without a terminal.
//! - Keys are fed through the event channel; dropping the sender ends the session.
//! - The returned state is inspected instead of the screen.

mod common;

use std::time::Duration;

use countrydir::app::{Channels, RunOptions, run_event_loop, run_fetch, run_session};
use countrydir::sources::ApiClient;
use countrydir::state::{AppState, Modal, Route};
use countrydir::theme::Settings;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tokio::sync::mpsc;

fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn options(base_url: String, events: mpsc::UnboundedReceiver<CEvent>) -> RunOptions {
    RunOptions {
        settings: Settings {
            api_base_url: base_url,
            ..Settings::default()
        },
        headless: true,
        events: Some(events),
    }
}

#[tokio::test]
/// What: The loop applies a real fetch answer before the keys that follow it.
///
/// Inputs:
/// - Stub serving Thailand and France; its answer is queued ahead of "fra", Enter, Enter.
///
/// Output:
/// - France is the only result and is open in the overlay.
///
/// Details:
/// - The fetch runs to completion before any key is queued, so no waiting is involved.
async fn event_loop_filters_and_opens_fetched_rows() {
    let stub = common::serve(200, common::THAILAND_FRANCE).await;
    let client = ApiClient::new(&stub.base_url).expect("client");
    let (tx, rx) = mpsc::unbounded_channel();
    let mut channels = Channels::new(rx);
    let mut app = AppState::default();

    countrydir::logic::ensure_loaded(&mut app, &channels.fetch_req_tx);
    let req = channels
        .fetch_req_rx
        .as_mut()
        .expect("request receiver")
        .try_recv()
        .expect("initial request queued");
    let outcome = run_fetch(&client, req).await;
    channels.fetch_res_tx.send(outcome).expect("queue answer");

    for ch in "fra".chars() {
        tx.send(key(KeyCode::Char(ch))).expect("send char");
    }
    tx.send(key(KeyCode::Enter)).expect("focus table");
    tx.send(key(KeyCode::Enter)).expect("open row");
    drop(tx);

    let mut terminal: Option<Terminal<TestBackend>> = None;
    tokio::time::timeout(
        Duration::from_secs(5),
        run_event_loop(&mut terminal, &mut app, &mut channels),
    )
    .await
    .expect("loop ends when input closes");
    assert_eq!(stub.seen().len(), 1);
    assert_eq!(app.countries.len(), 2);
    assert_eq!(app.input, "fra");
    assert_eq!(app.results.len(), 1);
    assert_eq!(app.modal, Modal::CountryDetail);
    assert_eq!(app.detail.as_ref().map(|d| d.cca3.as_str()), Some("FRA"));
}

#[tokio::test(flavor = "multi_thread")]
/// What: A headless session asks for the list and returns once input closes.
///
/// Inputs:
/// - Stub serving Thailand and France; keys "fra" then the sender is dropped.
///
/// Output:
/// - `Ok` state holding the typed query; the stub saw the list request.
async fn headless_session_requests_list_and_ends_on_close() {
    let stub = common::serve(200, common::THAILAND_FRANCE).await;
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(run_session(options(stub.base_url.clone(), rx)));

    stub.wait_for_requests(1).await;
    for ch in "fra".chars() {
        tx.send(key(KeyCode::Char(ch))).expect("send char");
    }
    drop(tx);

    let app = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("session ends when input closes")
        .expect("session task did not panic")
        .expect("session returns Ok");
    assert_eq!(app.input, "fra");
    assert!(stub.seen().iter().any(|path| path.contains("/all")));
}

#[tokio::test(flavor = "multi_thread")]
/// What: An unreachable API does not bring the session down.
///
/// Inputs:
/// - Base URL of a closed port; keys switch to About and quit with `q`.
///
/// Output:
/// - `Ok` state with no countries and no overlay.
async fn headless_session_survives_network_failure() {
    let base = common::refused_base_url().await;
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(run_session(options(base, rx)));

    tx.send(key(KeyCode::BackTab)).expect("switch route");
    tx.send(key(KeyCode::Char('q'))).expect("quit");

    let app = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("session ends on quit")
        .expect("session task did not panic")
        .expect("session returns Ok");
    assert_eq!(app.route, Route::About);
    assert!(app.countries.is_empty());
    assert_eq!(app.modal, Modal::None);
    drop(tx);
}

#[tokio::test]
/// What: An unusable base URL is reported as an error before any terminal work.
async fn invalid_base_url_is_an_error() {
    let (_tx, rx) = mpsc::unbounded_channel();
    let result = run_session(options("not a url".into(), rx)).await;
    assert!(result.is_err());
}
