//! Version parsing, comparison and extraction.
//!
//! Tool banners are irregular: numeric dotted components, sometimes with a
//! trailing alphabetic suffix (`2.5.1a`), buried inside arbitrary text. This
//! module turns such text into a [`Version`] and answers "is this at least
//! that?".
//!
//! # Modules
//!
//! - [`parse`] - Permissive string to [`Version`] conversion
//! - [`compare`] - Ordering and the `is_at_least` check
//! - [`extract`] - Locating a version-shaped substring in command output
//!
//! # Example
//!
//! ```
//! use hostcheck::version::{extract_version, Version};
//!
//! let raw = extract_version("sort (GNU coreutils) 8.32").unwrap();
//! assert_eq!(raw, "8.32");
//!
//! let actual = Version::parse(raw);
//! assert!(actual.is_at_least(&Version::parse("8.1")));
//! ```

pub mod compare;
pub mod extract;
pub mod parse;

pub use extract::extract_version;
pub use parse::Version;
