//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the four views

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use crate::repository::StagedUpload;
use warden_core::{ListingKind, ServerAction};

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update.
///
/// Each one becomes a background task talking to the control service; the
/// task reports back with a completion `Message`.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Start or stop the game server
    PerformServerAction { action: ServerAction },

    /// Send a console command to the running server
    SendCommand { command: String },

    /// Fetch the full listing for a repository view
    FetchListing { kind: ListingKind },

    /// Upload the staged file to a repository
    Upload {
        kind: ListingKind,
        staged: StagedUpload,
    },

    /// Delete a single named entry from a repository
    Delete { kind: ListingKind, filename: String },

    /// Fetch the full server property map
    FetchProperties,

    /// Persist the full server property map
    SaveProperties {
        entries: std::collections::BTreeMap<String, String>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
