//! Widgets for the Server Warden TUI

pub mod console;
pub mod footer;
pub mod header;
pub mod properties;
pub mod repository;

pub use console::ConsoleView;
pub use footer::FooterHints;
pub use header::HeaderBar;
pub use properties::PropertiesView;
pub use repository::RepositoryView;
