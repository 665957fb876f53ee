//! Piton - a single front door for your project's build tools.
//!
//! Piton turns a flat list of command-line tokens into a structured action,
//! then routes that action to a handler which may run an external process
//! and report timing and outcome.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing and subcommand dispatch
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Log-file sink configuration
//! - [`shell`] - External process execution and PATH lookup
//! - [`ui`] - Verbosity levels and console output
//!
//! # Example
//!
//! ```
//! use piton::cli::parser::{parse, Action};
//! use piton::logging::LogLevelHandle;
//! use piton::ui::MockOutput;
//!
//! let mut out = MockOutput::new();
//! let log = LogLevelHandle::disabled();
//! let action = parse(&mut out, &log, "piton", &[]).unwrap();
//! assert_eq!(action, Action::Help);
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod shell;
pub mod ui;

pub use error::{PitonError, Result};
