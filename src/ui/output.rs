//! Output verbosity levels.

use std::fmt;
use std::str::FromStr;

/// Ordered severity threshold for console output.
///
/// A sink with threshold `Info` surfaces info, warning, and error messages
/// and suppresses debug messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Show everything.
    Debug,
    /// Show progress and outcomes.
    #[default]
    Info,
    /// Show problems only.
    Warning,
    /// Show failures only.
    Error,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("unknown verbosity level: {}", s)),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}
