//! Subcommand implementations.
//!
//! Each registered subcommand lives in its own module as a `handle`
//! function taking the parsed payload and the output sink. Routing happens
//! in [`dispatcher`], which matches the closed
//! [`SubcommandName`](crate::cli::parser::SubcommandName) enum exhaustively
//! so an unregistered-but-parsed name cannot exist.

pub mod cmake;
pub mod dispatcher;
pub mod help;
pub mod tool;
pub mod version;

pub use dispatcher::{Dispatcher, HandleStatus};
