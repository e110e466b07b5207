//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion, both per kind and as the exact lines a terminal
//! would show.

use super::output::{format_summary, ERROR_PREFIX, OK_PREFIX};
use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    successes: Vec<String>,
    errors: Vec<String>,
    summaries: Vec<usize>,
    lines: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Passing details, without prefix.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Failure messages, without prefix.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Failure counts passed to [`UserInterface::summary`].
    pub fn summaries(&self) -> &[usize] {
        &self.summaries
    }

    /// Every line in order, exactly as printed (uncoloured).
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl UserInterface for MockUI {
    fn success(&mut self, detail: &str) {
        self.successes.push(detail.to_string());
        self.lines.push(format!("{}{}", OK_PREFIX, detail));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.lines.push(format!("{}{}", ERROR_PREFIX, msg));
    }

    fn summary(&mut self, failures: usize) {
        self.summaries.push(failures);
        self.lines.push(format_summary(failures));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::{CheckFailure, Finding};

    #[test]
    fn captures_successes_and_errors() {
        let mut ui = MockUI::new();
        ui.success("sh is Bash");
        ui.error("awk is not GNU");

        assert_eq!(ui.successes(), ["sh is Bash"]);
        assert_eq!(ui.errors(), ["awk is not GNU"]);
    }

    #[test]
    fn report_renders_like_format_finding() {
        let findings = [
            Finding::Pass("g++ works".into()),
            Finding::Fail(CheckFailure::PtySupportMissing),
        ];
        let mut ui = MockUI::new();
        for finding in &findings {
            ui.report(finding);
        }

        let expected: Vec<_> = findings.iter().map(crate::ui::format_finding).collect();
        assert_eq!(ui.lines(), expected.as_slice());
    }

    #[test]
    fn summary_line() {
        let mut ui = MockUI::new();
        ui.summary(2);
        assert_eq!(ui.summaries(), [2]);
        assert_eq!(ui.lines(), ["Host toolchain checks failed: 2 item(s)"]);
    }
}
