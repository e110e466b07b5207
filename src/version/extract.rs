//! Locating a version number inside free-form tool output.
//!
//! The shape searched for is one or more ASCII digits, a literal `.`, then
//! any run of ASCII letters, digits and dots. The first such run anywhere in
//! the text wins, so banners like `GNU Make 4.3` or copyright preambles are
//! skipped naturally.

use super::Version;

/// Find the first version-shaped substring in `text`.
///
/// Returns `None` when no run of digits is immediately followed by a dot.
pub fn extract_version(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if !bytes[pos].is_ascii_digit() {
            pos += 1;
            continue;
        }

        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }

        if bytes.get(pos) == Some(&b'.') {
            let mut end = pos + 1;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'.') {
                end += 1;
            }
            return Some(&text[start..end]);
        }
    }

    None
}

impl Version {
    /// Extract and parse the first version in `text`.
    pub fn extract(text: &str) -> Option<Version> {
        extract_version(text).map(Version::parse)
    }
}
