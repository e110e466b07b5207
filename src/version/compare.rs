//! Version ordering.
//!
//! Components are compared field by field after right-padding the shorter
//! side with zeros, so `2.5` and `2.5.0` are equal. On a numeric tie the
//! suffix decides: an empty suffix sorts before any non-empty one (`2.5.1`
//! is older than `2.5.1a`), otherwise suffixes compare as plain strings.
//!
//! This is an approximation of real-world version semantics, not semver:
//! `1.0rc1` sorts after `1.0`, and suffixes compare lexically (`b10` < `b9`).

use std::cmp::Ordering;

use super::Version;

impl Version {
    /// Total order used by every minimum-version check.
    pub fn compare(&self, other: &Version) -> Ordering {
        let len = self.components.len().max(other.components.len());
        let field = |v: &Version, i: usize| v.components.get(i).copied().unwrap_or(0);

        for i in 0..len {
            match field(self, i).cmp(&field(other, i)) {
                Ordering::Equal => {}
                decided => return decided,
            }
        }

        match (self.suffix.is_empty(), other.suffix.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.suffix.as_str().cmp(other.suffix.as_str()),
        }
    }

    /// Whether this version satisfies `minimum`.
    pub fn is_at_least(&self, minimum: &Version) -> bool {
        self.compare(minimum) != Ordering::Less
    }
}

/// Parse both sides and check `actual >= minimum`.
pub fn is_at_least(actual: &str, minimum: &str) -> bool {
    Version::parse(actual).is_at_least(&Version::parse(minimum))
}
