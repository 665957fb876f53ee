//! Terminal output sink.

use super::{should_use_colors, PitonTheme, UserOutput, Verbosity};

/// Output sink writing to the real terminal.
///
/// Warnings and errors go to stderr with themed styling; debug and info
/// messages go to stdout unstyled. Every message is also forwarded to the
/// `tracing` log at its level, independent of the console threshold, so the
/// log file keeps the full picture even at a quiet console setting.
pub struct TerminalOutput {
    verbosity: Verbosity,
    theme: PitonTheme,
}

impl TerminalOutput {
    /// Create a terminal sink with the given threshold.
    pub fn new(verbosity: Verbosity) -> Self {
        let theme = if should_use_colors() {
            PitonTheme::new()
        } else {
            PitonTheme::plain()
        };

        Self { verbosity, theme }
    }
}

impl UserOutput for TerminalOutput {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    fn show(&mut self, level: Verbosity, msg: &str) {
        match level {
            Verbosity::Debug => tracing::debug!("{}", msg),
            Verbosity::Info => tracing::info!("{}", msg),
            Verbosity::Warning => tracing::warn!("{}", msg),
            Verbosity::Error => tracing::error!("{}", msg),
        }

        if level < self.verbosity {
            return;
        }

        match level {
            Verbosity::Warning => eprintln!("{}", self.theme.format_warning(msg)),
            Verbosity::Error => eprintln!("{}", self.theme.format_error(msg)),
            _ => println!("{}", msg),
        }
    }
}
