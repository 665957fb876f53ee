//! The `tool` subcommand: run and install developer tools.

use crate::cli::parser::SubcommandPayload;
use crate::error::Result;
use crate::shell::{format_command, run_timed, which, ProcessRunner};
use crate::ui::UserOutput;

use super::dispatcher::HandleStatus;

fn usage_message() -> &'static str {
    "Usage: piton tool <action> [args...]\n\
     Supported actions:\n\
     \x20 run <tool> [args...]    Run a tool with optional arguments\n\
     \x20 install [args...]       Install tools (not yet implemented)"
}

/// Interpret the payload's first argument as a tool action.
pub fn handle(
    payload: &SubcommandPayload,
    out: &mut dyn UserOutput,
    runner: &dyn ProcessRunner,
) -> Result<HandleStatus> {
    let Some(action) = payload.args.first() else {
        out.error(&format!(
            "No action provided for 'tool' subcommand.\n{}",
            usage_message()
        ));
        return Ok(HandleStatus::UsageError);
    };

    match action.as_str() {
        "run" => {
            if payload.args.len() < 2 {
                out.error(&format!("No tool specified.\n{}", usage_message()));
                return Ok(HandleStatus::UsageError);
            }

            // Compose the command: tool + args
            let command = payload.args[1..].to_vec();

            match which(&command[0]) {
                Some(path) => out.debug(&format!(
                    "Resolved '{}' to {}.",
                    command[0],
                    path.display()
                )),
                None => out.debug(&format!("'{}' was not found on PATH.", command[0])),
            }

            out.info(&format!("Running tool: {}", format_command(&command)));
            run_timed(out, runner, &command)?;
            Ok(HandleStatus::Success)
        }
        "install" => {
            out.info("Tool installation is not yet implemented.");
            Ok(HandleStatus::Success)
        }
        other => {
            out.error(&format!(
                "Unknown action '{}' for 'tool' subcommand.\n{}",
                other,
                usage_message()
            ));
            Ok(HandleStatus::UsageError)
        }
    }
}
