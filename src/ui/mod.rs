//! Console output components.
//!
//! This module provides:
//! - [`UserOutput`] trait for output-sink abstraction
//! - [`TerminalOutput`] for real terminal usage
//! - [`MockOutput`] for tests
//! - [`Verbosity`] severity levels and the visual [`theme`]
//!
//! # Example
//!
//! ```
//! use piton::ui::{MockOutput, UserOutput, Verbosity};
//!
//! let mut out = MockOutput::new();
//! out.info("starting up");
//! out.warning("low disk space");
//!
//! assert!(out.infos().contains(&"starting up".to_string()));
//! assert!(out.warnings().contains(&"low disk space".to_string()));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockOutput;
pub use output::Verbosity;
pub use terminal::TerminalOutput;
pub use theme::{should_use_colors, PitonTheme};

/// Trait for the leveled user-facing output sink.
///
/// Every message is mirrored to the `tracing` log at its level; whether it
/// also reaches the terminal is decided by the sink's verbosity threshold.
/// This trait allows capturing output in tests.
pub trait UserOutput {
    /// Get the current verbosity threshold.
    fn verbosity(&self) -> Verbosity;

    /// Change the verbosity threshold.
    fn set_verbosity(&mut self, verbosity: Verbosity);

    /// Display a message at the given level.
    fn show(&mut self, level: Verbosity, msg: &str);

    /// Display a debug message.
    fn debug(&mut self, msg: &str) {
        self.show(Verbosity::Debug, msg);
    }

    /// Display an informational message.
    fn info(&mut self, msg: &str) {
        self.show(Verbosity::Info, msg);
    }

    /// Display a warning message.
    fn warning(&mut self, msg: &str) {
        self.show(Verbosity::Warning, msg);
    }

    /// Display an error message.
    fn error(&mut self, msg: &str) {
        self.show(Verbosity::Error, msg);
    }
}
