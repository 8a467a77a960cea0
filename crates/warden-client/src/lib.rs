//! warden-client - Remote control service boundary for Server Warden
//!
//! Two halves, matching the two ways the control service talks to us:
//!
//! - [`ControlClient`] wraps every request/response capability (process
//!   control, console commands, file and mod management, property
//!   persistence) as one HTTP call each. No retry, no queuing.
//! - [`LogStream`] maintains the single process-wide push channel that
//!   delivers console log lines over WebSocket.

pub mod http;
pub mod log_stream;
pub mod protocol;

pub use http::ControlClient;
pub use log_stream::{LogStream, LogStreamEvent};
pub use protocol::UploadAck;
