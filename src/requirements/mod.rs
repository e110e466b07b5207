//! Tool requirement checks.
//!
//! This module decides whether the host's build tools are new enough and
//! whether generic command names are backed by the expected implementation.
//!
//! # Modules
//!
//! - [`status`] - Check results, findings and the failure taxonomy
//! - [`checker`] - Minimum-version checks for versioned tools
//! - [`alias`] - Implementation checks for generic command names

pub mod alias;
pub mod checker;
pub mod status;

pub use alias::{contains_ignore_ascii_case, AliasChecker};
pub use checker::RequirementChecker;
pub use status::{CheckFailure, CheckResult, Finding};
