//! Main event loop: terminal events and background completions in, frames out

use tokio::sync::mpsc;
use tracing::info;

use warden_app::message::Message;
use warden_app::{handle_action, update, AppState, Settings};
use warden_client::{ControlClient, LogStream, LogStreamEvent};
use warden_core::prelude::*;

use crate::{event, render, terminal};

/// Capacity for the completion/message channel. Bounded so a flood of log
/// lines applies backpressure to the channel task instead of growing memory.
const CHANNEL_CAPACITY: usize = 256;

/// Run the dashboard until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    let client = ControlClient::new(&settings.server.base_url)?;
    let ws_url = settings.log_stream_url()?;
    info!(base_url = %client.base_url(), %ws_url, "starting dashboard");

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

    // The process-wide log channel. Its events are bridged into the message
    // loop; the connection itself outlives any single view.
    let (stream_tx, mut stream_rx) = mpsc::channel::<LogStreamEvent>(CHANNEL_CAPACITY);
    let log_stream = LogStream::spawn(ws_url, stream_tx);
    let bridge_tx = msg_tx.clone();
    let bridge = tokio::spawn(async move {
        while let Some(event) = stream_rx.recv().await {
            let message = match event {
                LogStreamEvent::Line(line) => Message::LogLine(line),
                LogStreamEvent::StateChanged(state) => Message::ChannelStateChanged(state),
            };
            if bridge_tx.send(message).await.is_err() {
                return;
            }
        }
    });

    let mut term = terminal::setup();

    let mut state = AppState::new();
    let result = event_loop(&mut term, &mut state, &client, &msg_tx, &mut msg_rx);

    log_stream.shutdown();
    bridge.abort();
    terminal::teardown();
    result
}

fn event_loop(
    term: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    client: &ControlClient,
    msg_tx: &mpsc::Sender<Message>,
    msg_rx: &mut mpsc::Receiver<Message>,
) -> Result<()> {
    loop {
        term.draw(|frame| render::draw(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        // Background completions and log lines first
        while let Ok(message) = msg_rx.try_recv() {
            process(state, message, client, msg_tx);
        }
        if state.should_quit() {
            return Ok(());
        }

        // Then one terminal event (or a tick)
        if let Some(message) = event::poll()? {
            process(state, message, client, msg_tx);
        }
        if state.should_quit() {
            return Ok(());
        }
    }
}

/// Feed one message through update, chasing follow-up messages and
/// dispatching any produced actions as background tasks.
fn process(
    state: &mut AppState,
    message: Message,
    client: &ControlClient,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);
        if let Some(action) = result.action {
            handle_action(action, client.clone(), msg_tx.clone());
        }
        next = result.message;
    }
}
