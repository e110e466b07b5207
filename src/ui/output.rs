//! Line formats.
//!
//! Callers script against these prefixes, so the text never changes; only
//! the terminal UI may colour them.

use crate::requirements::Finding;

/// Prefix of a passing line (padded to the width of [`ERROR_PREFIX`]).
pub const OK_PREFIX: &str = "OK:    ";

/// Prefix of a failing line.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Render a finding as its uncoloured output line.
pub fn format_finding(finding: &Finding) -> String {
    match finding {
        Finding::Pass(detail) => format!("{}{}", OK_PREFIX, detail),
        Finding::Fail(failure) => format!("{}{}", ERROR_PREFIX, failure),
    }
}

/// The closing verdict line.
pub fn format_summary(failures: usize) -> String {
    if failures == 0 {
        "All host toolchain checks passed.".to_string()
    } else {
        format!("Host toolchain checks failed: {} item(s)", failures)
    }
}
