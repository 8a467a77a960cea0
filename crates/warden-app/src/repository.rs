//! File/mod repository view state
//!
//! Two instances of the same state machine back the Files and Mods views.
//! The listing is the service's truth: a refresh replaces it wholesale,
//! while upload/delete acknowledgments patch it incrementally. Everything
//! else — staged selection, pending delete confirmation, substring filter —
//! is transient view state, discarded on teardown.

use std::path::PathBuf;

use warden_core::prelude::*;
use warden_core::{validate_mod_upload, ListingKind, StatusMessage};

/// At most one locally-chosen file staged for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedUpload {
    pub path: PathBuf,
    pub filename: String,
    pub size_bytes: u64,
}

/// What the repository view's text input is currently editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepoInput {
    #[default]
    None,
    /// Editing the case-insensitive substring filter
    Filter,
    /// Typing a local path to stage for upload
    Path,
}

/// State for one repository view (generic files or mods).
#[derive(Debug, Clone)]
pub struct RepositoryState {
    pub kind: ListingKind,
    /// Full listing as last reported by the service
    pub entries: Vec<String>,
    /// Cursor position within the *visible* (filtered) subset
    pub selected: usize,
    /// Case-insensitive substring filter; display-only
    pub filter: String,
    /// Local path input buffer for `select()`
    pub path_input: String,
    /// Which text input (if any) has focus
    pub input: RepoInput,
    /// Staged upload candidate
    pub staged: Option<StagedUpload>,
    /// Single pending delete target awaiting confirmation
    pub pending_delete: Option<String>,
    /// Latest success/failure message for this view
    pub status: Option<StatusMessage>,
    /// A listing fetch is in flight
    pub loading: bool,
    /// An upload is in flight
    pub uploading: bool,
}

impl RepositoryState {
    pub fn new(kind: ListingKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            selected: 0,
            filter: String::new(),
            path_input: String::new(),
            input: RepoInput::None,
            staged: None,
            pending_delete: None,
            status: None,
            loading: false,
            uploading: false,
        }
    }

    /// Discard all transient state (view teardown).
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    // ─────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────

    /// Full replace from the service's listing endpoint.
    pub fn replace_entries(&mut self, entries: Vec<String>) {
        self.entries = entries;
        self.loading = false;
        self.clamp_selection();
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.status = Some(StatusMessage::error(message));
    }

    /// Visible subset: case-insensitive substring containment over the full
    /// listing. Does not alter the underlying listing.
    pub fn visible(&self) -> Vec<&str> {
        if self.filter.is_empty() {
            return self.entries.iter().map(String::as_str).collect();
        }
        let needle = self.filter.to_lowercase();
        self.entries
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.clamp_selection();
    }

    /// The entry under the cursor, if any.
    pub fn selected_entry(&self) -> Option<String> {
        self.visible().get(self.selected).map(|s| s.to_string())
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Upload staging
    // ─────────────────────────────────────────────────────────

    /// Stage a candidate for upload.
    ///
    /// The mod variant validates locally first; on failure nothing is left
    /// staged. The generic file variant stages unconditionally.
    pub fn stage(&mut self, path: PathBuf, filename: String, size_bytes: u64) -> Result<()> {
        if self.kind == ListingKind::Mods {
            if let Err(e) = validate_mod_upload(&filename, size_bytes) {
                self.staged = None;
                return Err(e);
            }
        }
        self.staged = Some(StagedUpload {
            path,
            filename,
            size_bytes,
        });
        Ok(())
    }

    /// Take a copy of the staged selection for an upload attempt.
    ///
    /// The selection stays staged until the upload is acknowledged, so a
    /// failed attempt retains it.
    pub fn begin_upload(&mut self) -> Result<StagedUpload> {
        let staged = self.staged.clone().ok_or(Error::NoSelection)?;
        self.uploading = true;
        Ok(staged)
    }

    /// A successful upload appends exactly the acknowledged name and clears
    /// the staged selection. Incremental: no refetch.
    pub fn apply_upload_ack(&mut self, filename: String) {
        self.status = Some(StatusMessage::success(format!("Uploaded {filename}")));
        self.entries.push(filename);
        self.staged = None;
        self.uploading = false;
    }

    /// A failed upload retains the staged selection.
    pub fn upload_failed(&mut self, message: impl Into<String>) {
        self.uploading = false;
        self.status = Some(StatusMessage::error(message));
    }

    // ─────────────────────────────────────────────────────────
    // Delete confirmation
    // ─────────────────────────────────────────────────────────

    /// Hold a single target awaiting explicit confirmation. No network call.
    pub fn request_delete(&mut self, filename: String) {
        self.pending_delete = Some(filename);
    }

    /// Confirm the pending delete, dismissing the prompt immediately.
    /// The prompt does not come back even if the delete then fails.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Drop the pending target without any network call.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Apply a finished delete: success removes exactly one occurrence of
    /// the name (incremental), failure only surfaces the message.
    pub fn apply_delete_result(&mut self, filename: &str, result: Result<()>) {
        match result {
            Ok(()) => {
                if let Some(pos) = self.entries.iter().position(|n| n == filename) {
                    self.entries.remove(pos);
                }
                self.clamp_selection();
                self.status = Some(StatusMessage::success(format!("Deleted {filename}")));
            }
            Err(e) => {
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }
}
