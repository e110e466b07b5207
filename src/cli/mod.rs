//! Command-line interface for hostcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Loading configuration and running the preflight

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{run, CONFIG_ERROR_EXIT_CODE};
