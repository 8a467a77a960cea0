//! warden-app - Application state and orchestration for Server Warden
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: every user interaction and every network completion becomes a
//! [`Message`], [`handler::update`] folds messages into [`AppState`], and the
//! actions it returns are executed as background tasks by [`actions`].

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod properties;
pub mod repository;
pub mod state;

// Re-export primary types
pub use actions::handle_action;
pub use config::{load_settings, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use properties::PropertiesState;
pub use repository::{RepositoryState, StagedUpload};
pub use state::{AppState, ConsoleState, View};
