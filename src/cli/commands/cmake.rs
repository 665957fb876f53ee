//! The `cmake` subcommand.
//!
//! `cmake [args...]` is sugar for `tool run cmake [args...]`: the payload
//! is rewritten and handed to the tool handler. No CMake-specific logic
//! lives here.

use crate::cli::parser::{SubcommandName, SubcommandPayload};
use crate::error::Result;
use crate::shell::ProcessRunner;
use crate::ui::UserOutput;

use super::dispatcher::HandleStatus;

/// Run CMake through the tool runner.
pub fn handle(
    payload: &SubcommandPayload,
    out: &mut dyn UserOutput,
    runner: &dyn ProcessRunner,
) -> Result<HandleStatus> {
    let mut args = Vec::with_capacity(payload.args.len() + 2);
    args.push("run".to_string());
    args.push("cmake".to_string());
    args.extend(payload.args.iter().cloned());

    let rewritten = SubcommandPayload {
        name: SubcommandName::Tool,
        args,
    };
    super::tool::handle(&rewritten, out, runner)
}
