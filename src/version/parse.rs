//! Permissive version string parsing.

use std::fmt;

/// A parsed, comparable version.
///
/// `components` holds one integer per dot-separated segment; `suffix` holds
/// the trailing non-digit text of the last segment that had any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Version {
    /// Numeric fields in order (`"2.13.1"` is `[2, 13, 1]`).
    pub components: Vec<u64>,
    /// Trailing letters (`"2.5.1a"` has suffix `"a"`), empty if none.
    pub suffix: String,
}

impl Version {
    /// Parse a raw version string.
    ///
    /// Never fails. A segment without leading digits counts as `0`, and a
    /// later segment's trailing text replaces an earlier one's suffix.
    /// Oversized numbers saturate at `u64::MAX`.
    pub fn parse(raw: &str) -> Self {
        let mut version = Version::default();

        for token in raw.split('.') {
            let digits = token.bytes().take_while(u8::is_ascii_digit).count();
            let value = token.as_bytes()[..digits]
                .iter()
                .fold(0u64, |acc, b| {
                    acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
                });
            version.components.push(value);

            let rest = &token[digits..];
            if !rest.is_empty() {
                version.suffix = rest.to_string();
            }
        }

        version
    }
}

impl From<&str> for Version {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
            first = false;
        }
        f.write_str(&self.suffix)
    }
}
