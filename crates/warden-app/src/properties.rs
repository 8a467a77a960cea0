//! Server property editor state
//!
//! A flat string-keyed map loaded wholesale, edited one value at a time
//! locally, and persisted wholesale. Keys never change between loads; only
//! values mutate. A failed save leaves local state untouched (nothing was
//! mutated remotely), and the local map stays authoritative until the next
//! full load.

use std::collections::BTreeMap;

use warden_core::StatusMessage;

/// An in-progress edit of a single property value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEdit {
    pub key: String,
    pub buffer: String,
}

#[derive(Debug, Clone, Default)]
pub struct PropertiesState {
    /// The full property map; BTreeMap keeps iteration order stable
    pub entries: BTreeMap<String, String>,
    /// Cursor position within the stable key order
    pub selected: usize,
    /// Single value edit in progress, if any
    pub editing: Option<PropertyEdit>,
    /// Latest success/failure message for this view
    pub status: Option<StatusMessage>,
    /// A load is in flight
    pub loading: bool,
    /// A save is in flight
    pub saving: bool,
}

impl PropertiesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all state (view teardown).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replace local state with the service's authoritative copy.
    pub fn apply_loaded(&mut self, entries: BTreeMap<String, String>) {
        self.entries = entries;
        self.loading = false;
        self.editing = None;
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.status = Some(StatusMessage::error(message));
    }

    /// The key under the cursor in stable iteration order.
    pub fn selected_key(&self) -> Option<&String> {
        self.entries.keys().nth(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() && self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Start editing the selected value. The buffer starts from the current
    /// value; nothing changes until the edit is committed.
    pub fn begin_edit(&mut self) {
        if let Some(key) = self.selected_key().cloned() {
            let buffer = self.entries.get(&key).cloned().unwrap_or_default();
            self.editing = Some(PropertyEdit { key, buffer });
        }
    }

    pub fn edit_push(&mut self, c: char) {
        if let Some(edit) = self.editing.as_mut() {
            edit.buffer.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(edit) = self.editing.as_mut() {
            edit.buffer.pop();
        }
    }

    /// Commit the edit: mutates exactly one entry, locally only.
    pub fn commit_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            self.entries.insert(edit.key, edit.buffer);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// A save finished. Local state is retained unchanged either way; the
    /// map is not re-fetched on success.
    pub fn apply_save_result(&mut self, result: Result<(), String>) {
        self.saving = false;
        self.status = Some(match result {
            Ok(()) => StatusMessage::success("Properties saved"),
            Err(message) => StatusMessage::error(message),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> PropertiesState {
        let mut state = PropertiesState::new();
        state.apply_loaded(BTreeMap::from([
            ("difficulty".to_string(), "normal".to_string()),
            ("max-players".to_string(), "20".to_string()),
            ("motd".to_string(), "welcome".to_string()),
        ]));
        state
    }

    #[test]
    fn test_commit_edit_mutates_exactly_one_entry() {
        let mut state = loaded();
        state.select_next(); // "max-players" in BTreeMap order
        state.begin_edit();
        assert_eq!(state.editing.as_ref().unwrap().buffer, "20");

        state.edit_backspace();
        state.edit_backspace();
        state.edit_push('3');
        state.edit_push('2');
        state.commit_edit();

        assert_eq!(state.entries["max-players"], "32");
        assert_eq!(state.entries["difficulty"], "normal");
        assert_eq!(state.entries["motd"], "welcome");
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_cancel_edit_changes_nothing() {
        let mut state = loaded();
        state.begin_edit();
        state.edit_push('!');
        state.cancel_edit();
        assert_eq!(state.entries["difficulty"], "normal");
    }

    #[test]
    fn test_failed_save_leaves_every_pair_unchanged() {
        let mut state = loaded();
        let before = state.entries.clone();

        state.saving = true;
        state.apply_save_result(Err("write failed".to_string()));

        assert_eq!(state.entries, before);
        assert!(state.status.as_ref().unwrap().is_error);
        assert!(!state.saving);
    }

    #[test]
    fn test_successful_save_does_not_refetch_or_mutate() {
        let mut state = loaded();
        let before = state.entries.clone();
        state.apply_save_result(Ok(()));
        assert_eq!(state.entries, before);
        assert!(!state.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_load_after_failed_save_overwrites_with_authoritative_copy() {
        let mut state = loaded();
        state.begin_edit();
        state.edit_push('x');
        state.commit_edit();
        state.apply_save_result(Err("nope".to_string()));

        let authoritative = BTreeMap::from([("difficulty".to_string(), "hard".to_string())]);
        state.apply_loaded(authoritative.clone());
        assert_eq!(state.entries, authoritative);
    }

    #[test]
    fn test_keys_round_trip_between_loads() {
        let state = loaded();
        let keys: Vec<&String> = state.entries.keys().collect();
        // Stable iteration order: sorted
        assert_eq!(keys, vec!["difficulty", "max-players", "motd"]);
    }

    #[test]
    fn test_selection_clamps_on_smaller_reload() {
        let mut state = loaded();
        state.select_next();
        state.select_next();
        state.apply_loaded(BTreeMap::from([("only".to_string(), "1".to_string())]));
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_key().map(String::as_str), Some("only"));
    }
}
