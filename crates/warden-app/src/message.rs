//! Message types for the application (TEA pattern)
//!
//! Every user interaction and every network completion is a `Message`.
//! Completion variants carry `Result<_, String>` rather than `Error` so the
//! enum stays `Clone`; the error string is what the view's message region
//! displays.

use std::collections::BTreeMap;

use crate::input_key::InputKey;
use crate::state::View;
use warden_core::{ChannelState, ListingKind, ServerAction};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    /// Switch to another view, tearing down the current one
    SwitchView(View),

    // ─────────────────────────────────────────────────────────
    // User Intents
    // ─────────────────────────────────────────────────────────
    /// Start or stop the game server (ignored while one is in flight)
    ServerActionRequested(ServerAction),

    /// Submit the console command input
    SubmitCommand,

    /// Re-fetch a repository listing
    RefreshListing(ListingKind),

    /// Upload the staged file, if any
    SubmitUpload(ListingKind),

    /// Confirm the pending delete, if any
    ConfirmPendingDelete(ListingKind),

    /// Re-fetch the property map
    ReloadProperties,

    /// Persist the full property map
    SavePropertiesRequested,

    // ─────────────────────────────────────────────────────────
    // Live Log Channel
    // ─────────────────────────────────────────────────────────
    /// One log line pushed by the control service
    LogLine(String),

    /// The shared channel connected or dropped
    ChannelStateChanged(ChannelState),

    // ─────────────────────────────────────────────────────────
    // Console Completions
    // ─────────────────────────────────────────────────────────
    /// A start/stop request finished
    ServerActionFinished {
        action: ServerAction,
        result: Result<(), String>,
    },

    /// A console command finished
    CommandFinished { result: Result<(), String> },

    // ─────────────────────────────────────────────────────────
    // Repository Completions
    // ─────────────────────────────────────────────────────────
    /// A listing fetch finished (full replace on success)
    ListingLoaded {
        kind: ListingKind,
        result: Result<Vec<String>, String>,
    },

    /// An upload finished; `Ok` carries the acknowledged filename
    UploadFinished {
        kind: ListingKind,
        result: Result<String, String>,
    },

    /// A delete finished for the named entry
    DeleteFinished {
        kind: ListingKind,
        filename: String,
        result: Result<(), String>,
    },

    // ─────────────────────────────────────────────────────────
    // Property Editor Completions
    // ─────────────────────────────────────────────────────────
    /// The full property map arrived (or failed to)
    PropertiesLoaded {
        result: Result<BTreeMap<String, String>, String>,
    },

    /// A whole-map save finished
    PropertiesSaved { result: Result<(), String> },
}
