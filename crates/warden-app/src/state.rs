//! Central application state (TEA pattern)

use warden_core::{ChannelState, ListingKind, StatusMessage};

use crate::properties::PropertiesState;
use crate::repository::RepositoryState;

/// The four navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Console,
    Mods,
    Files,
    Properties,
}

impl View {
    pub const ALL: [View; 4] = [View::Console, View::Mods, View::Files, View::Properties];

    pub fn title(&self) -> &'static str {
        match self {
            View::Console => "Console",
            View::Mods => "Mods",
            View::Files => "Files",
            View::Properties => "Properties",
        }
    }

    pub fn next(&self) -> View {
        match self {
            View::Console => View::Mods,
            View::Mods => View::Files,
            View::Files => View::Properties,
            View::Properties => View::Console,
        }
    }

    pub fn prev(&self) -> View {
        match self {
            View::Console => View::Properties,
            View::Mods => View::Console,
            View::Files => View::Mods,
            View::Properties => View::Files,
        }
    }
}

/// Console view state: the live log buffer plus the command input.
///
/// The log buffer is append-only and unbounded within a session; insertion
/// order is arrival order. It belongs to this view alone and is cleared on
/// teardown — the underlying channel connection is not.
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    /// Ordered, append-only log lines
    pub logs: Vec<String>,
    /// Command input buffer
    pub command: String,
    /// The command input has focus
    pub input_active: bool,
    /// A start/stop action is in flight (disables the action keys)
    pub busy: bool,
    /// Stick to the newest line; manual scrolling detaches
    pub follow: bool,
    /// Scroll offset in lines from the top, meaningful when not following
    pub scroll: usize,
    /// Latest success/failure message for this view
    pub status: Option<StatusMessage>,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self {
            follow: true,
            ..Self::default()
        }
    }

    /// Discard all transient state (view teardown).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Append one line in arrival order. No dedup, no bound.
    pub fn push_line(&mut self, line: String) {
        self.logs.push(line);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.follow = false;
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        if !self.follow {
            self.scroll = (self.scroll + lines).min(self.logs.len().saturating_sub(1));
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.follow = false;
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.follow = true;
    }
}

/// Top-level application state.
///
/// Each view owns its state exclusively; nothing is shared across views
/// except through the remote service. The live log channel's connection
/// state is the one process-wide piece, mirrored here for the header.
#[derive(Debug, Clone)]
pub struct AppState {
    pub view: View,
    pub console: ConsoleState,
    pub mods: RepositoryState,
    pub files: RepositoryState,
    pub properties: PropertiesState,
    /// Mirrored state of the shared log channel
    pub channel: ChannelState,
    quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: View::Console,
            console: ConsoleState::new(),
            mods: RepositoryState::new(ListingKind::Mods),
            files: RepositoryState::new(ListingKind::Files),
            properties: PropertiesState::new(),
            channel: ChannelState::Disconnected,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Leave the current view, unconditionally tearing down its transient
    /// state. The channel connection survives; only its consumer detaches.
    pub fn teardown_current_view(&mut self) {
        match self.view {
            View::Console => self.console.reset(),
            View::Mods => self.mods.reset(),
            View::Files => self.files.reset(),
            View::Properties => self.properties.reset(),
        }
    }

    /// The repository state for a listing kind.
    pub fn repository(&self, kind: ListingKind) -> &RepositoryState {
        match kind {
            ListingKind::Mods => &self.mods,
            ListingKind::Files => &self.files,
        }
    }

    pub fn repository_mut(&mut self, kind: ListingKind) -> &mut RepositoryState {
        match kind {
            ListingKind::Mods => &mut self.mods,
            ListingKind::Files => &mut self.files,
        }
    }

    /// Whether a completion for `kind` still has a live view to land in.
    /// Results for torn-down views are discarded silently.
    pub fn view_for(&self, kind: ListingKind) -> View {
        match kind {
            ListingKind::Mods => View::Mods,
            ListingKind::Files => View::Files,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cycle_covers_all_destinations() {
        let mut view = View::Console;
        for _ in 0..4 {
            view = view.next();
        }
        assert_eq!(view, View::Console);
        assert_eq!(View::Console.prev(), View::Properties);
    }

    #[test]
    fn test_log_buffer_preserves_arrival_order() {
        let mut console = ConsoleState::new();
        for i in 0..100 {
            console.push_line(format!("line {i}"));
        }
        assert_eq!(console.logs.len(), 100);
        assert_eq!(console.logs[0], "line 0");
        assert_eq!(console.logs[99], "line 99");
        // no dedup
        console.push_line("line 99".to_string());
        assert_eq!(console.logs.len(), 101);
    }

    #[test]
    fn test_teardown_clears_log_buffer() {
        let mut state = AppState::new();
        state.console.push_line("hello".to_string());
        state.teardown_current_view();
        assert!(state.console.logs.is_empty());
    }

    #[test]
    fn test_manual_scroll_detaches_follow() {
        let mut console = ConsoleState::new();
        assert!(console.follow);
        console.push_line("a".to_string());
        console.scroll_up(1);
        assert!(!console.follow);
        console.scroll_to_bottom();
        assert!(console.follow);
    }
}
