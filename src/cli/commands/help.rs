//! The `help` subcommand and help text rendering.

use crate::cli::parser::SubcommandPayload;
use crate::error::Result;
use crate::ui::UserOutput;

use super::dispatcher::HandleStatus;

/// Build the help text, addressed as `program_name`.
pub fn help_message(program_name: &str) -> String {
    format!(
        "A single front door for your project's build tools.\n\
         \n\
         Usage: {program_name} [OPTIONS] <SUBCOMMAND> [ARGS]...\n\
         \n\
         Subcommands:\n\
         \x20 cmake [args...]          Run CMake through the tool runner\n\
         \x20 help [name]              Show this help message\n\
         \x20 tool <action> [args...]  Run or install developer tools\n\
         \x20 version                  Show version information\n\
         \n\
         Options:\n\
         \x20 -h, --help               Show this help message\n\
         \x20     --version            Show version information\n\
         \x20     --verbose            Shorthand for --verbose=debug\n\
         \x20     --verbose=<level>    Console verbosity: debug, info, warning, error\n\
         \x20     --log-level=<level>  Log file verbosity: debug, info, warning, error"
    )
}

/// Render the help text.
///
/// A first payload argument, when present, substitutes the displayed
/// program name (useful when the binary is invoked through a wrapper).
pub fn handle(
    payload: &SubcommandPayload,
    out: &mut dyn UserOutput,
    program_name: &str,
) -> Result<HandleStatus> {
    let name = payload
        .args
        .first()
        .map(String::as_str)
        .unwrap_or(program_name);
    out.info(&help_message(name));
    Ok(HandleStatus::Success)
}
