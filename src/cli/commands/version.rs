//! The `version` subcommand.

use crate::cli::parser::SubcommandPayload;
use crate::error::Result;
use crate::ui::UserOutput;

use super::dispatcher::HandleStatus;

/// Build the version string.
pub fn version_message() -> String {
    format!("piton version {}", env!("CARGO_PKG_VERSION"))
}

/// Render the version string. Payload arguments are ignored.
pub fn handle(_payload: &SubcommandPayload, out: &mut dyn UserOutput) -> Result<HandleStatus> {
    out.info(&version_message());
    Ok(HandleStatus::Success)
}
