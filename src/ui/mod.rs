//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! Data (rendered endpoints, config listings) goes through
//! [`UserInterface::message`] on stdout. Errors and warnings go to stderr so
//! that output can be piped or sourced.
//!
//! # Example
//!
//! ```
//! use endpoint_resolver::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("API_URL=http://localhost:8000");
//! ui.success("Configuration valid");
//!
//! assert!(ui.has_message("API_URL=http://localhost:8000"));
//! assert!(ui.has_success("Configuration valid"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display data or an informational line. Always shown.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);
}
