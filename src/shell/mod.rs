//! External process execution and lookup.

pub mod command;
pub mod which;

pub use command::{
    format_command, format_elapsed, run_timed, ExecResult, ProcessRunner, SystemRunner,
};
pub use which::{which, which_in};
