//! # warden-core - Core Domain Types
//!
//! Foundation crate for Server Warden. Provides domain types, the error
//! taxonomy, upload validation, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ServerAction`] - Process-level action on the remote server (Start, Stop)
//! - [`ListingKind`] - Which file repository a listing belongs to (Files, Mods)
//! - [`ChannelState`] - Live log channel connection state
//! - [`StatusMessage`] - Per-view success/failure message region
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Upload Validation (`validate`)
//! - [`validate_mod_upload()`] - Archive extension + size ceiling checks
//! - [`validate_command()`] - Rejects empty console commands
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use warden_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;
pub mod validate;

/// Prelude for common imports used throughout all Server Warden crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{ChannelState, ListingKind, ServerAction, StatusMessage};
pub use validate::{
    validate_command, validate_mod_upload, MAX_MOD_UPLOAD_BYTES, MOD_ARCHIVE_EXTENSION,
};
