//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;
use warden_core::StatusMessage;

use crate::message::Message;
use crate::state::{AppState, View};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
///
/// Completions that arrive for a view that is no longer active are dropped
/// without touching state: leaving a view abandons its in-flight work.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::SwitchView(view) => handle_switch_view(state, view),

        // ─────────────────────────────────────────────────────────
        // User Intents
        // ─────────────────────────────────────────────────────────
        Message::ServerActionRequested(action) => {
            if state.console.busy {
                return UpdateResult::none();
            }
            state.console.busy = true;
            UpdateResult::action(UpdateAction::PerformServerAction { action })
        }

        Message::SubmitCommand => {
            match warden_core::validate_command(&state.console.command) {
                Ok(()) => {
                    // Input stays populated until the send is acknowledged
                    UpdateResult::action(UpdateAction::SendCommand {
                        command: state.console.command.clone(),
                    })
                }
                Err(e) => {
                    // Rejected locally, nothing is sent
                    state.console.status = Some(StatusMessage::error(e.to_string()));
                    UpdateResult::none()
                }
            }
        }

        Message::RefreshListing(kind) => {
            state.repository_mut(kind).loading = true;
            UpdateResult::action(UpdateAction::FetchListing { kind })
        }

        Message::SubmitUpload(kind) => {
            let repo = state.repository_mut(kind);
            match repo.begin_upload() {
                Ok(staged) => UpdateResult::action(UpdateAction::Upload { kind, staged }),
                Err(e) => {
                    repo.status = Some(StatusMessage::error(e.to_string()));
                    UpdateResult::none()
                }
            }
        }

        Message::ConfirmPendingDelete(kind) => {
            // The prompt is dismissed here, before the outcome is known
            match state.repository_mut(kind).confirm_delete() {
                Some(filename) => UpdateResult::action(UpdateAction::Delete { kind, filename }),
                None => UpdateResult::none(),
            }
        }

        Message::ReloadProperties => {
            state.properties.loading = true;
            UpdateResult::action(UpdateAction::FetchProperties)
        }

        Message::SavePropertiesRequested => {
            if state.properties.saving {
                return UpdateResult::none();
            }
            state.properties.saving = true;
            UpdateResult::action(UpdateAction::SaveProperties {
                entries: state.properties.entries.clone(),
            })
        }

        // ─────────────────────────────────────────────────────────
        // Live Log Channel
        // ─────────────────────────────────────────────────────────
        Message::LogLine(line) => {
            // Only the console consumes the shared channel; lines that
            // arrive while another view is up are not buffered.
            if state.view == View::Console {
                state.console.push_line(line);
            }
            UpdateResult::none()
        }

        Message::ChannelStateChanged(channel) => {
            debug!(?channel, "log channel state changed");
            state.channel = channel;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Console Completions
        // ─────────────────────────────────────────────────────────
        Message::ServerActionFinished { action, result } => {
            if state.view != View::Console {
                return UpdateResult::none();
            }
            state.console.busy = false;
            state.console.status = Some(match result {
                Ok(()) => StatusMessage::success(format!("Server {} requested", action.label())),
                Err(message) => StatusMessage::error(message),
            });
            UpdateResult::none()
        }

        Message::CommandFinished { result } => {
            if state.view != View::Console {
                return UpdateResult::none();
            }
            match result {
                Ok(()) => {
                    state.console.command.clear();
                    state.console.status = Some(StatusMessage::success("Command sent"));
                }
                Err(message) => {
                    // The typed command is kept so it can be retried.
                    state.console.status = Some(StatusMessage::error(message));
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Repository Completions
        // ─────────────────────────────────────────────────────────
        Message::ListingLoaded { kind, result } => {
            if state.view != state.view_for(kind) {
                return UpdateResult::none();
            }
            let repo = state.repository_mut(kind);
            match result {
                Ok(entries) => repo.replace_entries(entries),
                Err(message) => repo.load_failed(message),
            }
            UpdateResult::none()
        }

        Message::UploadFinished { kind, result } => {
            if state.view != state.view_for(kind) {
                return UpdateResult::none();
            }
            let repo = state.repository_mut(kind);
            match result {
                Ok(filename) => repo.apply_upload_ack(filename),
                Err(message) => repo.upload_failed(message),
            }
            UpdateResult::none()
        }

        Message::DeleteFinished {
            kind,
            filename,
            result,
        } => {
            if state.view != state.view_for(kind) {
                return UpdateResult::none();
            }
            let repo = state.repository_mut(kind);
            repo.apply_delete_result(
                &filename,
                result.map_err(warden_core::Error::remote),
            );
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Property Editor Completions
        // ─────────────────────────────────────────────────────────
        Message::PropertiesLoaded { result } => {
            if state.view != View::Properties {
                return UpdateResult::none();
            }
            match result {
                Ok(entries) => state.properties.apply_loaded(entries),
                Err(message) => state.properties.load_failed(message),
            }
            UpdateResult::none()
        }

        Message::PropertiesSaved { result } => {
            if state.view != View::Properties {
                return UpdateResult::none();
            }
            state.properties.apply_save_result(result);
            UpdateResult::none()
        }
    }
}

/// Tear down the outgoing view, activate the incoming one, and kick off its
/// initial load. Re-selecting the active view is a no-op.
fn handle_switch_view(state: &mut AppState, view: View) -> UpdateResult {
    if state.view == view {
        return UpdateResult::none();
    }
    state.teardown_current_view();
    state.view = view;

    match view {
        View::Console => UpdateResult::none(),
        View::Mods => {
            state.mods.loading = true;
            UpdateResult::action(UpdateAction::FetchListing {
                kind: warden_core::ListingKind::Mods,
            })
        }
        View::Files => {
            state.files.loading = true;
            UpdateResult::action(UpdateAction::FetchListing {
                kind: warden_core::ListingKind::Files,
            })
        }
        View::Properties => {
            state.properties.loading = true;
            UpdateResult::action(UpdateAction::FetchProperties)
        }
    }
}
