//! Key event handlers for the four views
//!
//! Keys either mutate view-local state directly (text input, selection,
//! scrolling) or produce an intent `Message` for `update` to act on. Text
//! inputs capture the keyboard while focused; global navigation keys only
//! apply when nothing has focus.

use std::path::PathBuf;

use warden_core::{ListingKind, ServerAction, StatusMessage};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::repository::RepoInput;
use crate::state::{AppState, View};

const SCROLL_PAGE: usize = 10;

/// Handle a key event, optionally producing a follow-up message.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits regardless of focus
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if has_text_focus(state) {
        return handle_text_input(state, key);
    }

    // Global navigation
    match key {
        InputKey::Char('q') => return Some(Message::Quit),
        InputKey::Char('1') => return Some(Message::SwitchView(View::Console)),
        InputKey::Char('2') => return Some(Message::SwitchView(View::Mods)),
        InputKey::Char('3') => return Some(Message::SwitchView(View::Files)),
        InputKey::Char('4') => return Some(Message::SwitchView(View::Properties)),
        InputKey::Tab => return Some(Message::SwitchView(state.view.next())),
        InputKey::BackTab => return Some(Message::SwitchView(state.view.prev())),
        _ => {}
    }

    match state.view {
        View::Console => handle_console_key(state, key),
        View::Mods => handle_repository_key(state, ListingKind::Mods, key),
        View::Files => handle_repository_key(state, ListingKind::Files, key),
        View::Properties => handle_properties_key(state, key),
    }
}

fn has_text_focus(state: &AppState) -> bool {
    match state.view {
        View::Console => state.console.input_active,
        View::Mods => state.mods.input != RepoInput::None,
        View::Files => state.files.input != RepoInput::None,
        View::Properties => state.properties.editing.is_some(),
    }
}

fn handle_text_input(state: &mut AppState, key: InputKey) -> Option<Message> {
    match state.view {
        View::Console => handle_command_input(state, key),
        View::Mods => handle_repo_input(state, ListingKind::Mods, key),
        View::Files => handle_repo_input(state, ListingKind::Files, key),
        View::Properties => handle_edit_input(state, key),
    }
}

// ─────────────────────────────────────────────────────────
// Console
// ─────────────────────────────────────────────────────────

fn handle_console_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let console = &mut state.console;
    match key {
        InputKey::Char('s') => Some(Message::ServerActionRequested(ServerAction::Start)),
        InputKey::Char('x') => Some(Message::ServerActionRequested(ServerAction::Stop)),
        InputKey::Char('c') => {
            console.input_active = true;
            None
        }
        InputKey::Up => {
            console.scroll_up(1);
            None
        }
        InputKey::Down => {
            console.scroll_down(1);
            None
        }
        InputKey::PageUp => {
            console.scroll_up(SCROLL_PAGE);
            None
        }
        InputKey::PageDown => {
            console.scroll_down(SCROLL_PAGE);
            None
        }
        InputKey::Home => {
            console.scroll_to_top();
            None
        }
        InputKey::End => {
            console.scroll_to_bottom();
            None
        }
        _ => None,
    }
}

fn handle_command_input(state: &mut AppState, key: InputKey) -> Option<Message> {
    let console = &mut state.console;
    match key {
        InputKey::Char(c) => {
            console.command.push(c);
            None
        }
        InputKey::Backspace => {
            console.command.pop();
            None
        }
        InputKey::Enter => Some(Message::SubmitCommand),
        InputKey::Esc => {
            console.input_active = false;
            None
        }
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────
// Repositories
// ─────────────────────────────────────────────────────────

fn handle_repository_key(
    state: &mut AppState,
    kind: ListingKind,
    key: InputKey,
) -> Option<Message> {
    let repo = state.repository_mut(kind);

    // A pending delete modal captures the keyboard until answered
    if repo.pending_delete.is_some() {
        return match key {
            InputKey::Char('y') | InputKey::Enter => Some(Message::ConfirmPendingDelete(kind)),
            InputKey::Char('n') | InputKey::Esc => {
                repo.cancel_delete();
                None
            }
            _ => None,
        };
    }

    match key {
        InputKey::Char('r') => Some(Message::RefreshListing(kind)),
        InputKey::Char('/') => {
            repo.input = RepoInput::Filter;
            None
        }
        InputKey::Char('o') => {
            repo.input = RepoInput::Path;
            None
        }
        InputKey::Char('u') => Some(Message::SubmitUpload(kind)),
        InputKey::Char('d') => {
            if let Some(entry) = repo.selected_entry() {
                repo.request_delete(entry);
            }
            None
        }
        InputKey::Up => {
            repo.select_prev();
            None
        }
        InputKey::Down => {
            repo.select_next();
            None
        }
        _ => None,
    }
}

fn handle_repo_input(state: &mut AppState, kind: ListingKind, key: InputKey) -> Option<Message> {
    let repo = state.repository_mut(kind);
    match repo.input {
        RepoInput::Filter => match key {
            InputKey::Char(c) => {
                let mut filter = repo.filter.clone();
                filter.push(c);
                repo.set_filter(filter);
            }
            InputKey::Backspace => {
                let mut filter = repo.filter.clone();
                filter.pop();
                repo.set_filter(filter);
            }
            InputKey::Enter => repo.input = RepoInput::None,
            InputKey::Esc => {
                repo.set_filter("");
                repo.input = RepoInput::None;
            }
            _ => {}
        },
        RepoInput::Path => match key {
            InputKey::Char(c) => repo.path_input.push(c),
            InputKey::Backspace => {
                repo.path_input.pop();
            }
            InputKey::Enter => {
                stage_from_path_input(state, kind);
            }
            InputKey::Esc => {
                repo.path_input.clear();
                repo.input = RepoInput::None;
            }
            _ => {}
        },
        RepoInput::None => {}
    }
    None
}

/// Resolve the typed path against the local filesystem and stage it.
/// Nothing stays staged when validation or the filesystem lookup fails.
fn stage_from_path_input(state: &mut AppState, kind: ListingKind) {
    let repo = state.repository_mut(kind);
    let path = PathBuf::from(repo.path_input.trim());
    repo.input = RepoInput::None;
    repo.path_input.clear();

    let filename = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => {
            repo.status = Some(StatusMessage::error("Not a file path"));
            return;
        }
    };
    let size_bytes = match std::fs::metadata(&path) {
        Ok(meta) if meta.is_file() => meta.len(),
        Ok(_) => {
            repo.status = Some(StatusMessage::error(format!("{filename} is not a file")));
            return;
        }
        Err(e) => {
            repo.status = Some(StatusMessage::error(format!("Cannot read {filename}: {e}")));
            return;
        }
    };

    match repo.stage(path, filename.clone(), size_bytes) {
        Ok(()) => {
            repo.status = Some(StatusMessage::success(format!("Staged {filename}")));
        }
        Err(e) => {
            repo.status = Some(StatusMessage::error(e.to_string()));
        }
    }
}

// ─────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────

fn handle_properties_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let props = &mut state.properties;
    match key {
        InputKey::Up => {
            props.select_prev();
            None
        }
        InputKey::Down => {
            props.select_next();
            None
        }
        InputKey::Enter => {
            props.begin_edit();
            None
        }
        InputKey::Char('s') => Some(Message::SavePropertiesRequested),
        InputKey::Char('r') => Some(Message::ReloadProperties),
        _ => None,
    }
}

fn handle_edit_input(state: &mut AppState, key: InputKey) -> Option<Message> {
    let props = &mut state.properties;
    match key {
        InputKey::Char(c) => props.edit_push(c),
        InputKey::Backspace => props.edit_backspace(),
        InputKey::Enter => props.commit_edit(),
        InputKey::Esc => props.cancel_edit(),
        _ => {}
    }
    None
}
