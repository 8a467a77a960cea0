//! Live log channel: the control service's push stream of console lines
//!
//! One WebSocket connection is opened for the whole process lifetime and
//! shared across views — opening a view never reconnects, it only starts or
//! stops consuming the forwarded lines. A background task reads text frames
//! and forwards every line, in arrival order, into an mpsc channel. No
//! deduplication, no buffering bound, no acknowledgments.
//!
//! Reconnection is handled inside the task with capped exponential backoff;
//! lines the service emits during a gap are lost. State transitions are
//! reported so the UI can show channel health.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;

use warden_core::prelude::*;
use warden_core::ChannelState;

/// Initial reconnection backoff duration.
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Maximum reconnection backoff duration (cap).
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Events forwarded from the background channel task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogStreamEvent {
    /// One console log line, in arrival order.
    Line(String),
    /// The channel connected or dropped.
    StateChanged(ChannelState),
}

/// Handle to the process-wide log channel task.
///
/// Dropping the handle aborts the background task; in normal operation it
/// lives as long as the application.
pub struct LogStream {
    task: tokio::task::JoinHandle<()>,
    state: Arc<std::sync::RwLock<ChannelState>>,
}

impl LogStream {
    /// Spawn the channel task connecting to `ws_url`.
    ///
    /// Forwarding stops (and the task exits) when the receiving side of
    /// `event_tx` is dropped.
    pub fn spawn(ws_url: String, event_tx: mpsc::Sender<LogStreamEvent>) -> Self {
        let state = Arc::new(std::sync::RwLock::new(ChannelState::Disconnected));
        let task_state = state.clone();
        let task = tokio::spawn(async move {
            run_channel(ws_url, event_tx, task_state).await;
        });
        Self { task, state }
    }

    /// Current connection state, for status displays.
    pub fn state(&self) -> ChannelState {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Abort the background task. Only used on application shutdown.
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

/// Connect-read-reconnect loop. Never returns except when the consumer is gone.
async fn run_channel(
    ws_url: String,
    event_tx: mpsc::Sender<LogStreamEvent>,
    state: Arc<std::sync::RwLock<ChannelState>>,
) {
    let mut backoff = INITIAL_BACKOFF;

    loop {
        match connect_async(&ws_url).await {
            Ok((mut ws, _)) => {
                info!("log channel connected: {ws_url}");
                backoff = INITIAL_BACKOFF;
                set_state(&state, ChannelState::Connected);
                if send_event(&event_tx, LogStreamEvent::StateChanged(ChannelState::Connected))
                    .await
                    .is_err()
                {
                    return;
                }

                while let Some(frame) = ws.next().await {
                    match frame {
                        Ok(WsMessage::Text(text)) => {
                            // One frame may carry several lines; arrival order
                            // within the frame is preserved by the split.
                            for line in text.lines() {
                                if send_event(&event_tx, LogStreamEvent::Line(line.to_string()))
                                    .await
                                    .is_err()
                                {
                                    return;
                                }
                            }
                        }
                        Ok(WsMessage::Ping(payload)) => {
                            if ws.send(WsMessage::Pong(payload)).await.is_err() {
                                break;
                            }
                        }
                        Ok(WsMessage::Close(_)) => {
                            debug!("log channel closed by service");
                            break;
                        }
                        Ok(_) => {} // binary/pong frames carry no log lines
                        Err(e) => {
                            warn!("log channel read error: {e}");
                            break;
                        }
                    }
                }
            }
            Err(e) => {
                debug!("log channel connect failed: {e}");
            }
        }

        set_state(&state, ChannelState::Disconnected);
        if send_event(
            &event_tx,
            LogStreamEvent::StateChanged(ChannelState::Disconnected),
        )
        .await
        .is_err()
        {
            return;
        }

        tokio::time::sleep(backoff).await;
        backoff = (backoff * 2).min(MAX_BACKOFF);
    }
}

fn set_state(state: &Arc<std::sync::RwLock<ChannelState>>, value: ChannelState) {
    *state.write().unwrap_or_else(|e| e.into_inner()) = value;
}

async fn send_event(
    tx: &mpsc::Sender<LogStreamEvent>,
    event: LogStreamEvent,
) -> std::result::Result<(), ()> {
    tx.send(event).await.map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stream_starts_disconnected() {
        let (tx, mut rx) = mpsc::channel(8);
        // Nothing listens on this port; the task stays in its backoff loop.
        let stream = LogStream::spawn("ws://127.0.0.1:1/logs".to_string(), tx);
        assert_eq!(stream.state(), ChannelState::Disconnected);

        // The failed connect still reports a Disconnected transition.
        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            LogStreamEvent::StateChanged(ChannelState::Disconnected)
        );
        stream.shutdown();
    }

    #[tokio::test]
    async fn test_task_exits_when_consumer_dropped() {
        let (tx, rx) = mpsc::channel(8);
        let stream = LogStream::spawn("ws://127.0.0.1:1/logs".to_string(), tx);
        drop(rx);

        // The task notices the closed channel on its next send and returns.
        tokio::time::sleep(Duration::from_millis(50)).await;
        stream.shutdown();
    }
}
