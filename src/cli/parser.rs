//! Argument parsing.
//!
//! A single left-to-right scan over the raw tokens, no backtracking.
//! Global flags (`--verbose`, `--log-level=`) may be interleaved in any
//! order before the subcommand name, so `--verbose cmake ...` and
//! `cmake --verbose ...` differ only in whether `--verbose` reaches the
//! top level: once a subcommand name is matched, every remaining token is
//! captured verbatim as that subcommand's arguments and no further flag
//! parsing occurs. Verbosity flags take effect during the scan, so
//! diagnostics for later tokens already honor the requested level.

use std::fmt;
use std::str::FromStr;

use crate::logging::LogLevelHandle;
use crate::ui::{UserOutput, Verbosity};

/// The parsed outcome of interpreting one invocation's tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the help text.
    Help,
    /// Show the version string.
    Version,
    /// Execute a registered subcommand.
    Subcommand(SubcommandPayload),
}

/// Payload for a subcommand action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcommandPayload {
    /// The subcommand to execute.
    pub name: SubcommandName,

    /// Command-line arguments provided to the subcommand. Does not include
    /// the subcommand name itself or any application-wide flags parsed
    /// before it.
    pub args: Vec<String>,
}

/// The fixed set of registered subcommands.
///
/// Keeping this a closed enum means dispatch matches it exhaustively and a
/// parsed-but-unregistered name cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubcommandName {
    Cmake,
    Help,
    Tool,
    Version,
}

impl SubcommandName {
    /// Every registered subcommand, in display order.
    pub const ALL: [SubcommandName; 4] = [
        SubcommandName::Cmake,
        SubcommandName::Help,
        SubcommandName::Tool,
        SubcommandName::Version,
    ];

    /// The name as typed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cmake => "cmake",
            Self::Help => "help",
            Self::Tool => "tool",
            Self::Version => "version",
        }
    }
}

impl FromStr for SubcommandName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cmake" => Ok(Self::Cmake),
            "help" => Ok(Self::Help),
            "tool" => Ok(Self::Tool),
            "version" => Ok(Self::Version),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SubcommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified parse failure.
///
/// The parser has already shown an explanatory message through the sink by
/// the time either variant is returned; callers only map it to an exit
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed or unrecognized token, or an invalid flag value.
    BadCommand,
    /// Input exhausted without reaching a terminal action.
    NoSubcommand,
}

fn invalid_level_message(level: &str) -> String {
    format!(
        "Invalid verbosity level: {}. Valid levels are: debug, info, warning, error.",
        level
    )
}

fn known_subcommands() -> String {
    let names: Vec<&str> = SubcommandName::ALL.iter().map(|n| n.as_str()).collect();
    names.join(", ")
}

/// Parse command-line arguments into an [`Action`].
///
/// # Arguments
///
/// * `out` - Output sink; verbosity flags mutate its threshold mid-scan
/// * `log` - Handle to the log file's level filter, for `--log-level=`
/// * `program_name` - Display name of the program (typically argv\[0\])
/// * `args` - The tokens after the program name
pub fn parse(
    out: &mut dyn UserOutput,
    log: &LogLevelHandle,
    program_name: &str,
    args: &[String],
) -> Result<Action, ParseError> {
    if args.is_empty() {
        return Ok(Action::Help);
    }

    for (index, token) in args.iter().enumerate() {
        match token.as_str() {
            "--help" | "-h" => return Ok(Action::Help),
            "--version" => return Ok(Action::Version),
            "--verbose" => out.set_verbosity(Verbosity::Debug),
            token => {
                if let Some(level) = token.strip_prefix("--verbose=") {
                    match level.parse::<Verbosity>() {
                        Ok(verbosity) => out.set_verbosity(verbosity),
                        Err(_) => {
                            out.error(&invalid_level_message(level));
                            return Err(ParseError::BadCommand);
                        }
                    }
                } else if let Some(level) = token.strip_prefix("--log-level=") {
                    match level.parse::<Verbosity>() {
                        Ok(verbosity) => log.set_level(verbosity),
                        Err(_) => {
                            out.error(&invalid_level_message(level));
                            return Err(ParseError::BadCommand);
                        }
                    }
                } else if let Ok(name) = token.parse::<SubcommandName>() {
                    return Ok(Action::Subcommand(SubcommandPayload {
                        name,
                        args: args[index + 1..].to_vec(),
                    }));
                } else {
                    out.error(&format!(
                        "Unexpected argument '{}'. Run '{} --help' for usage information.",
                        token, program_name
                    ));
                    return Err(ParseError::BadCommand);
                }
            }
        }
    }

    out.error(&format!(
        "{}: no subcommand provided. Known subcommands: {}.",
        program_name,
        known_subcommands()
    ));
    Err(ParseError::NoSubcommand)
}
