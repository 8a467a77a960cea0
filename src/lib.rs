//! Server Warden Library
//!
//! A terminal dashboard for administering a remote game server through its
//! control service.

// Re-export the workspace crates under one roof
pub use warden_app as app;
pub use warden_client as client;
pub use warden_core as core;
pub use warden_tui as tui;

// Re-export main entry points
pub use warden_app::{load_settings, Settings};
pub use warden_tui::run;
