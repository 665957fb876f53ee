//! Visual theme and styling.

use console::Style;

/// Piton's visual theme.
#[derive(Debug, Clone)]
pub struct PitonTheme {
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
}

impl Default for PitonTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PitonTheme {
    /// Create the default Piton theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check whether colored output should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a TTY
    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_warning() {
        let theme = PitonTheme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = PitonTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn plain_theme_adds_no_escapes() {
        let theme = PitonTheme::plain();
        assert_eq!(theme.format_error("boom"), "✗ boom");
    }
}
