//! Error types for Piton operations.
//!
//! This module defines [`PitonError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Parse and usage errors are reported to the user where they occur and
//!   surface as status values, not as `PitonError`
//! - `PitonError::CommandFailed` carries an external command's exit code up
//!   to `main`, which adopts it as the process exit status
//! - Use `anyhow::Error` (via `PitonError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for Piton operations.
#[derive(Debug, Error)]
pub enum PitonError {
    /// External command exited nonzero or could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Piton operations.
pub type Result<T> = std::result::Result<T, PitonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = PitonError::CommandFailed {
            command: "[\"cmake\", \"--build\"]".into(),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("cmake"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PitonError = io_err.into();
        assert!(matches!(err, PitonError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PitonError::CommandFailed {
                command: "[]".into(),
                code: None,
            })
        }
        assert!(returns_error().is_err());
    }
}
