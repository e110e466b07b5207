//! Report output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real runs (stdout for passes, stderr for failures)
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use hostcheck::requirements::Finding;
//! use hostcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.report(&Finding::Pass("Make 4.3 >= 4.0".into()));
//! ui.summary(0);
//!
//! assert_eq!(
//!     ui.lines(),
//!     ["OK:    Make 4.3 >= 4.0", "All host toolchain checks passed."]
//! );
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::{format_finding, format_summary, ERROR_PREFIX, OK_PREFIX};
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, HostCheckTheme};

use crate::requirements::Finding;

/// Trait for reporting check outcomes.
///
/// This trait allows capturing the report in tests.
pub trait UserInterface {
    /// Report a passing line (detail without prefix).
    fn success(&mut self, detail: &str);

    /// Report a failing line (message without prefix).
    fn error(&mut self, msg: &str);

    /// Report the closing verdict for `failures` failed checks.
    fn summary(&mut self, failures: usize);

    /// Report one finding.
    fn report(&mut self, finding: &Finding) {
        match finding {
            Finding::Pass(detail) => self.success(detail),
            Finding::Fail(failure) => self.error(&failure.to_string()),
        }
    }
}
