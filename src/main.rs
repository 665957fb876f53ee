//! Piton CLI entry point.

use std::process::ExitCode;

use piton::cli::commands::Dispatcher;
use piton::cli::parser;
use piton::logging;
use piton::shell::SystemRunner;
use piton::ui::{TerminalOutput, UserOutput, Verbosity};
use piton::PitonError;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|arg0| display_name(arg0))
        .unwrap_or_else(|| "piton".to_string());

    let log = logging::init();
    tracing::debug!("piton starting with args: {:?}", args);

    let mut out = TerminalOutput::new(Verbosity::Info);

    let action = match parser::parse(&mut out, &log, &program_name, args.get(1..).unwrap_or(&[])) {
        Ok(action) => action,
        // The parser has already explained the failure to the user.
        Err(_) => return ExitCode::FAILURE,
    };

    let runner = SystemRunner;
    let dispatcher = Dispatcher::new(&program_name, &runner);
    match dispatcher.dispatch(&action, &mut out) {
        Ok(status) => ExitCode::from(status.exit_code() as u8),
        // The executor has already reported the failing command; adopt the
        // child's exit code as our own.
        Err(PitonError::CommandFailed { code, .. }) => ExitCode::from(code.unwrap_or(1) as u8),
        Err(err) => {
            out.error(&format!("Error: {}", err));
            ExitCode::FAILURE
        }
    }
}

/// Basename of argv\[0\], for display in messages.
fn display_name(arg0: &str) -> String {
    std::path::Path::new(arg0)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("piton")
        .to_string()
}
