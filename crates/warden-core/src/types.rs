//! Shared domain types for the control panel

use serde::{Deserialize, Serialize};

/// Process-level action on the remote game server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerAction {
    Start,
    Stop,
}

impl ServerAction {
    /// Endpoint path segment for this action (`POST /{start|stop}`)
    pub fn endpoint(&self) -> &'static str {
        match self {
            ServerAction::Start => "start",
            ServerAction::Stop => "stop",
        }
    }

    /// Human-readable label for status messages
    pub fn label(&self) -> &'static str {
        match self {
            ServerAction::Start => "Start",
            ServerAction::Stop => "Stop",
        }
    }
}

/// Which remote file repository a listing or mutation targets.
///
/// The two repository views are near-identical; this tag is what routes a
/// completion message back to the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    /// Generic server files (no upload validation)
    Files,
    /// Binary add-ons, validated client-side before staging
    Mods,
}

impl ListingKind {
    pub fn title(&self) -> &'static str {
        match self {
            ListingKind::Files => "Files",
            ListingKind::Mods => "Mods",
        }
    }
}

/// Connection state of the live log channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelState {
    #[default]
    Disconnected,
    Connected,
}

impl ChannelState {
    pub fn is_connected(&self) -> bool {
        *self == ChannelState::Connected
    }
}

/// Latest success or failure message for a view's message region.
///
/// Each view keeps at most one; a new message replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_action_endpoints() {
        assert_eq!(ServerAction::Start.endpoint(), "start");
        assert_eq!(ServerAction::Stop.endpoint(), "stop");
    }

    #[test]
    fn test_channel_state_default_disconnected() {
        assert!(!ChannelState::default().is_connected());
        assert!(ChannelState::Connected.is_connected());
    }

    #[test]
    fn test_status_message_replaces_not_accumulates() {
        // StatusMessage is a value type; holders store Option<StatusMessage>
        let ok = StatusMessage::success("saved");
        let err = StatusMessage::error("failed");
        assert!(!ok.is_error);
        assert!(err.is_error);
    }
}
