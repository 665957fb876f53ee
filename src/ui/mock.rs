//! Mock output sink for testing.
//!
//! `MockOutput` implements the [`UserOutput`] trait and captures all
//! messages for later assertion.
//!
//! # Example
//!
//! ```
//! use piton::ui::{MockOutput, UserOutput};
//!
//! let mut out = MockOutput::new();
//! out.info("Running tool");
//! out.error("Something broke");
//!
//! assert!(out.infos().contains(&"Running tool".to_string()));
//! assert!(out.errors().iter().any(|e| e.contains("broke")));
//! ```

use super::{UserOutput, Verbosity};

/// Mock output sink that records every message shown.
///
/// Messages are recorded regardless of the configured threshold so tests
/// can assert on suppressed output too.
#[derive(Debug, Default)]
pub struct MockOutput {
    verbosity: Verbosity,
    shown: Vec<(Verbosity, String)>,
}

impl MockOutput {
    /// Create a new mock sink with the default (info) threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages in order, with their levels.
    pub fn shown(&self) -> &[(Verbosity, String)] {
        &self.shown
    }

    /// Recorded messages at one level.
    pub fn at_level(&self, level: Verbosity) -> Vec<String> {
        self.shown
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    /// Recorded debug messages.
    pub fn debugs(&self) -> Vec<String> {
        self.at_level(Verbosity::Debug)
    }

    /// Recorded info messages.
    pub fn infos(&self) -> Vec<String> {
        self.at_level(Verbosity::Info)
    }

    /// Recorded warning messages.
    pub fn warnings(&self) -> Vec<String> {
        self.at_level(Verbosity::Warning)
    }

    /// Recorded error messages.
    pub fn errors(&self) -> Vec<String> {
        self.at_level(Verbosity::Error)
    }

    /// Whether any recorded message contains the needle.
    pub fn contains(&self, needle: &str) -> bool {
        self.shown.iter().any(|(_, msg)| msg.contains(needle))
    }
}

impl UserOutput for MockOutput {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    fn show(&mut self, level: Verbosity, msg: &str) {
        self.shown.push((level, msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_records_messages_by_level() {
        let mut out = MockOutput::new();
        out.debug("d");
        out.info("i");
        out.warning("w");
        out.error("e");

        assert_eq!(out.debugs(), vec!["d"]);
        assert_eq!(out.infos(), vec!["i"]);
        assert_eq!(out.warnings(), vec!["w"]);
        assert_eq!(out.errors(), vec!["e"]);
    }

    #[test]
    fn mock_tracks_verbosity_changes() {
        let mut out = MockOutput::new();
        assert_eq!(out.verbosity(), Verbosity::Info);
        out.set_verbosity(Verbosity::Debug);
        assert_eq!(out.verbosity(), Verbosity::Debug);
    }

    #[test]
    fn mock_contains_searches_all_levels() {
        let mut out = MockOutput::new();
        out.warning("disk almost full");
        assert!(out.contains("almost"));
        assert!(!out.contains("missing"));
    }
}
