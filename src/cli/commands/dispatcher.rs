//! Subcommand dispatching.

use crate::cli::parser::{Action, SubcommandName};
use crate::error::Result;
use crate::shell::ProcessRunner;
use crate::ui::UserOutput;

/// Outcome of executing a dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleStatus {
    /// The action completed.
    Success,
    /// Caller-correctable misuse; a usage hint has already been shown.
    UsageError,
    /// Unexpected failure.
    Error,
}

impl HandleStatus {
    /// Exit code for this status (0 success, 2 usage, 1 otherwise).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::UsageError => 2,
            Self::Error => 1,
        }
    }
}

/// Routes parsed actions to their handlers.
pub struct Dispatcher<'a> {
    program_name: String,
    runner: &'a dyn ProcessRunner,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher for the given program name and process runner.
    pub fn new(program_name: impl Into<String>, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            program_name: program_name.into(),
            runner,
        }
    }

    /// The display name used in help output.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Execute the handler for a parsed action.
    ///
    /// Propagates [`PitonError::CommandFailed`](crate::PitonError) from the
    /// timed executor unchanged so `main` can adopt the child's exit code.
    pub fn dispatch(&self, action: &Action, out: &mut dyn UserOutput) -> Result<HandleStatus> {
        match action {
            Action::Help => {
                out.info(&super::help::help_message(&self.program_name));
                Ok(HandleStatus::Success)
            }
            Action::Version => {
                out.info(&super::version::version_message());
                Ok(HandleStatus::Success)
            }
            Action::Subcommand(payload) => match payload.name {
                SubcommandName::Cmake => super::cmake::handle(payload, out, self.runner),
                SubcommandName::Help => super::help::handle(payload, out, &self.program_name),
                SubcommandName::Tool => super::tool::handle(payload, out, self.runner),
                SubcommandName::Version => super::version::handle(payload, out),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::SubcommandPayload;
    use crate::shell::ExecResult;
    use crate::ui::MockOutput;
    use std::cell::RefCell;

    /// Runner that records each executed command and reports success.
    struct RecordingRunner {
        commands: RefCell<Vec<Vec<String>>>,
    }

    impl RecordingRunner {
        fn new() -> Self {
            Self {
                commands: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProcessRunner for RecordingRunner {
        fn run(&self, command: &[String]) -> std::io::Result<ExecResult> {
            self.commands.borrow_mut().push(command.to_vec());
            Ok(ExecResult { exit_code: Some(0) })
        }
    }

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn handle_status_exit_codes() {
        assert_eq!(HandleStatus::Success.exit_code(), 0);
        assert_eq!(HandleStatus::UsageError.exit_code(), 2);
        assert_eq!(HandleStatus::Error.exit_code(), 1);
    }

    #[test]
    fn help_action_renders_help_text() {
        let runner = RecordingRunner::new();
        let dispatcher = Dispatcher::new("piton", &runner);
        let mut out = MockOutput::new();

        let status = dispatcher.dispatch(&Action::Help, &mut out).unwrap();

        assert_eq!(status, HandleStatus::Success);
        assert!(out.infos().iter().any(|m| m.contains("Usage: piton")));
    }

    #[test]
    fn version_action_renders_version() {
        let runner = RecordingRunner::new();
        let dispatcher = Dispatcher::new("piton", &runner);
        let mut out = MockOutput::new();

        let status = dispatcher.dispatch(&Action::Version, &mut out).unwrap();

        assert_eq!(status, HandleStatus::Success);
        assert!(out
            .infos()
            .iter()
            .any(|m| m.contains(env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn cmake_dispatch_matches_tool_run_cmake() {
        let mut out = MockOutput::new();

        let cmake_runner = RecordingRunner::new();
        let dispatcher = Dispatcher::new("piton", &cmake_runner);
        let cmake = Action::Subcommand(SubcommandPayload {
            name: SubcommandName::Cmake,
            args: tokens(&["-S", ".", "-B", "build"]),
        });
        dispatcher.dispatch(&cmake, &mut out).unwrap();

        let tool_runner = RecordingRunner::new();
        let dispatcher = Dispatcher::new("piton", &tool_runner);
        let tool = Action::Subcommand(SubcommandPayload {
            name: SubcommandName::Tool,
            args: tokens(&["run", "cmake", "-S", ".", "-B", "build"]),
        });
        dispatcher.dispatch(&tool, &mut out).unwrap();

        assert_eq!(
            cmake_runner.commands.borrow().as_slice(),
            tool_runner.commands.borrow().as_slice()
        );
        assert_eq!(
            cmake_runner.commands.borrow()[0],
            tokens(&["cmake", "-S", ".", "-B", "build"])
        );
    }

    #[test]
    fn help_subcommand_substitutes_program_name() {
        let runner = RecordingRunner::new();
        let dispatcher = Dispatcher::new("piton", &runner);
        let mut out = MockOutput::new();

        let action = Action::Subcommand(SubcommandPayload {
            name: SubcommandName::Help,
            args: tokens(&["bld"]),
        });
        let status = dispatcher.dispatch(&action, &mut out).unwrap();

        assert_eq!(status, HandleStatus::Success);
        assert!(out.infos().iter().any(|m| m.contains("Usage: bld")));
    }
}
