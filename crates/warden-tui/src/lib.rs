//! warden-tui - Terminal UI for Server Warden
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! rendering, and the event loop that drives warden-app's update function.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
