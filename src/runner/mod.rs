//! Preflight orchestration.

pub mod preflight;

pub use preflight::{Preflight, PreflightResult, Stage};
