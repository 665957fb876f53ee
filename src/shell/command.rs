//! Timed external command execution.

use std::io;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{PitonError, Result};
use crate::ui::UserOutput;

/// Result of running an external command.
#[derive(Debug, Clone, Copy)]
pub struct ExecResult {
    /// Exit code (None if terminated by a signal).
    pub exit_code: Option<i32>,
}

/// Strategy for spawning the external process.
///
/// [`run_timed`] takes the runner as a parameter so tests can substitute a
/// fake that returns a canned [`ExecResult`] without touching the operating
/// system.
pub trait ProcessRunner {
    /// Run `command[0]` with the remaining tokens as arguments, blocking
    /// until it exits.
    fn run(&self, command: &[String]) -> io::Result<ExecResult>;
}

/// Runner that spawns real processes with inherited stdio.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &[String]) -> io::Result<ExecResult> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(ExecResult {
            exit_code: status.code(),
        })
    }
}

/// Format a command for display purposes.
///
/// Every token is double-quoted (embedded quotes escaped), joined with
/// `", "`, and wrapped in brackets: `["cmake", "--build", "."]`.
pub fn format_command<S: AsRef<str>>(command: &[S]) -> String {
    let quoted: Vec<String> = command
        .iter()
        .map(|arg| format!("\"{}\"", arg.as_ref().replace('"', "\\\"")))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Format an elapsed wall-clock duration.
///
/// Durations up to 9999 ms render as milliseconds, up to 599 s as whole
/// seconds, and anything longer as minutes plus remainder seconds.
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    if ms <= 9999 {
        return format!("{}ms", ms);
    }

    let secs = elapsed.as_secs();
    if secs <= 599 {
        format!("{}s", secs)
    } else {
        format!("{}m{}s", secs / 60, secs % 60)
    }
}

/// Run an external command to completion, reporting timing and outcome.
///
/// On success the elapsed time is reported at info level. A nonzero exit
/// (or a command that could not be started) is reported as a warning and
/// returned as [`PitonError::CommandFailed`] carrying the child's exit
/// code; the caller propagates it unchanged and the process exits with
/// that code.
pub fn run_timed(
    out: &mut dyn UserOutput,
    runner: &dyn ProcessRunner,
    command: &[String],
) -> Result<()> {
    let rendered = format_command(command);
    out.debug(&format!("Executing command: {}", rendered));

    let start = Instant::now();
    let result = match runner.run(command) {
        Ok(result) => result,
        Err(err) => {
            out.warning(&format!(
                "Command {} could not be started: {}",
                rendered, err
            ));
            return Err(PitonError::CommandFailed {
                command: rendered,
                code: None,
            });
        }
    };
    let elapsed = start.elapsed();

    match result.exit_code {
        Some(0) => {
            out.info(&format!(
                "ran command in {}: {}",
                format_elapsed(elapsed),
                rendered
            ));
            out.debug("Command completed successfully.");
            Ok(())
        }
        Some(code) => {
            out.warning(&format!(
                "Command {} failed with exit code {}.",
                rendered, code
            ));
            Err(PitonError::CommandFailed {
                command: rendered,
                code: Some(code),
            })
        }
        None => {
            out.warning(&format!("Command {} was terminated by a signal.", rendered));
            Err(PitonError::CommandFailed {
                command: rendered,
                code: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockOutput;

    struct FakeRunner {
        exit_code: Option<i32>,
    }

    impl ProcessRunner for FakeRunner {
        fn run(&self, _command: &[String]) -> io::Result<ExecResult> {
            Ok(ExecResult {
                exit_code: self.exit_code,
            })
        }
    }

    struct FailingRunner;

    impl ProcessRunner for FailingRunner {
        fn run(&self, _command: &[String]) -> io::Result<ExecResult> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    fn command(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn format_empty_command() {
        let args: [&str; 0] = [];
        assert_eq!(format_command(&args), "[]");
    }

    #[test]
    fn format_some_args() {
        assert_eq!(
            format_command(&["arg1", "arg2", "arg3"]),
            r#"["arg1", "arg2", "arg3"]"#
        );
    }

    #[test]
    fn format_args_with_spaces() {
        assert_eq!(
            format_command(&["arg 1", "arg2", "arg 3"]),
            r#"["arg 1", "arg2", "arg 3"]"#
        );
    }

    #[test]
    fn format_args_with_quotes() {
        assert_eq!(
            format_command(&[r#"arg"1"#, "arg2", "arg'3"]),
            r#"["arg\"1", "arg2", "arg'3"]"#
        );
    }

    #[test]
    fn elapsed_millisecond_bucket() {
        assert_eq!(format_elapsed(Duration::from_millis(0)), "0ms");
        assert_eq!(format_elapsed(Duration::from_millis(742)), "742ms");
        assert_eq!(format_elapsed(Duration::from_millis(9999)), "9999ms");
    }

    #[test]
    fn elapsed_second_bucket() {
        assert_eq!(format_elapsed(Duration::from_millis(10000)), "10s");
        assert_eq!(format_elapsed(Duration::from_secs(42)), "42s");
        assert_eq!(format_elapsed(Duration::from_millis(599000)), "599s");
    }

    #[test]
    fn elapsed_minute_bucket() {
        assert_eq!(format_elapsed(Duration::from_millis(600000)), "10m0s");
        assert_eq!(format_elapsed(Duration::from_secs(601)), "10m1s");
        assert_eq!(format_elapsed(Duration::from_secs(3725)), "62m5s");
    }

    #[test]
    fn run_timed_success_reports_timing() {
        let mut out = MockOutput::new();
        let runner = FakeRunner { exit_code: Some(0) };

        let result = run_timed(&mut out, &runner, &command(&["true"]));

        assert!(result.is_ok());
        assert!(out.debugs().iter().any(|m| m.contains(r#"["true"]"#)));
        assert!(out
            .infos()
            .iter()
            .any(|m| m.starts_with("ran command in") && m.contains(r#"["true"]"#)));
    }

    #[test]
    fn run_timed_failure_carries_exit_code() {
        let mut out = MockOutput::new();
        let runner = FakeRunner { exit_code: Some(7) };

        let err = run_timed(&mut out, &runner, &command(&["false"])).unwrap_err();

        match err {
            PitonError::CommandFailed { code, .. } => assert_eq!(code, Some(7)),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(out.warnings().iter().any(|m| m.contains("exit code 7")));
    }

    #[test]
    fn run_timed_spawn_failure_has_no_code() {
        let mut out = MockOutput::new();

        let err = run_timed(&mut out, &FailingRunner, &command(&["ghost"])).unwrap_err();

        match err {
            PitonError::CommandFailed { code, .. } => assert_eq!(code, None),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(out
            .warnings()
            .iter()
            .any(|m| m.contains("could not be started")));
    }

    #[test]
    fn run_timed_signal_termination_has_no_code() {
        let mut out = MockOutput::new();
        let runner = FakeRunner { exit_code: None };

        let err = run_timed(&mut out, &runner, &command(&["sleepy"])).unwrap_err();

        assert!(matches!(
            err,
            PitonError::CommandFailed { code: None, .. }
        ));
        assert!(out.warnings().iter().any(|m| m.contains("signal")));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_reports_real_exit_codes() {
        let runner = SystemRunner;

        let ok = runner.run(&command(&["true"])).unwrap();
        assert_eq!(ok.exit_code, Some(0));

        let fail = runner.run(&command(&["false"])).unwrap();
        assert_eq!(fail.exit_code, Some(1));
    }

    #[test]
    fn system_runner_rejects_empty_command() {
        let runner = SystemRunner;
        assert!(runner.run(&[]).is_err());
    }
}
