//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action becomes one spawned task that performs a single request
//! against the control service and reports its outcome as a completion
//! `Message`. Errors are surfaced as message strings; the update loop owns
//! what to do with them.

use tokio::sync::mpsc;
use tracing::warn;

use crate::message::Message;
use crate::UpdateAction;
use warden_client::ControlClient;
use warden_core::ListingKind;

/// Execute an action by spawning a background task.
pub fn handle_action(action: UpdateAction, client: ControlClient, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::PerformServerAction { action } => {
            tokio::spawn(async move {
                let result = client
                    .perform_server_action(action)
                    .await
                    .map_err(|e| e.to_string());
                send(&msg_tx, Message::ServerActionFinished { action, result }).await;
            });
        }

        UpdateAction::SendCommand { command } => {
            tokio::spawn(async move {
                let result = client
                    .send_command(&command)
                    .await
                    .map_err(|e| e.to_string());
                send(&msg_tx, Message::CommandFinished { result }).await;
            });
        }

        UpdateAction::FetchListing { kind } => {
            tokio::spawn(async move {
                let result = fetch_listing(&client, kind).await.map_err(|e| e.to_string());
                send(&msg_tx, Message::ListingLoaded { kind, result }).await;
            });
        }

        UpdateAction::Upload { kind, staged } => {
            tokio::spawn(async move {
                let result = match kind {
                    ListingKind::Files => client.upload_file(&staged.path).await,
                    ListingKind::Mods => client.upload_mod(&staged.path).await,
                };
                let result = result
                    .map(|ack| ack.filename)
                    .map_err(|e| e.to_string());
                send(&msg_tx, Message::UploadFinished { kind, result }).await;
            });
        }

        UpdateAction::Delete { kind, filename } => {
            tokio::spawn(async move {
                let result = match kind {
                    ListingKind::Files => client.delete_file(&filename).await,
                    ListingKind::Mods => client.delete_mod(&filename).await,
                };
                let result = result.map_err(|e| e.to_string());
                send(
                    &msg_tx,
                    Message::DeleteFinished {
                        kind,
                        filename,
                        result,
                    },
                )
                .await;
            });
        }

        UpdateAction::FetchProperties => {
            tokio::spawn(async move {
                let result = client
                    .fetch_properties()
                    .await
                    .map_err(|e| e.to_string());
                send(&msg_tx, Message::PropertiesLoaded { result }).await;
            });
        }

        UpdateAction::SaveProperties { entries } => {
            tokio::spawn(async move {
                let result = client
                    .save_properties(&entries)
                    .await
                    .map_err(|e| e.to_string());
                send(&msg_tx, Message::PropertiesSaved { result }).await;
            });
        }
    }
}

async fn fetch_listing(
    client: &ControlClient,
    kind: ListingKind,
) -> warden_core::Result<Vec<String>> {
    match kind {
        ListingKind::Files => client.fetch_file_list().await,
        ListingKind::Mods => client.fetch_mod_list().await,
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if let Err(e) = msg_tx.send(message).await {
        warn!("event loop gone, dropping completion: {e}");
    }
}
