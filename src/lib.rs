//! hostcheck - preflight verification of a host build toolchain.
//!
//! Before building a Linux system from source, the host's compiler, shell,
//! core utilities and kernel must meet minimum versions. hostcheck runs each
//! tool's version command, pulls the version out of whatever the tool
//! prints, compares it against a minimum, and reports one line per check
//! plus an aggregate verdict.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - The check table: built-in defaults, YAML loading, validation
//! - [`environment`] - Kernel, PTY, compiler and core count checks
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Version and alias checks, check results
//! - [`runner`] - Fixed-order orchestration and failure tally
//! - [`shell`] - Process execution
//! - [`ui`] - Line-oriented report output
//! - [`version`] - Version parsing, comparison and extraction
//!
//! # Example
//!
//! ```
//! use hostcheck::config::{CheckConfig, Requirement};
//! use hostcheck::environment::MockHost;
//! use hostcheck::runner::{Preflight, Stage};
//! use hostcheck::shell::MockRunner;
//!
//! let config = CheckConfig {
//!     requirements: vec![Requirement::new("Make", "make --version", "4.0")],
//!     ..CheckConfig::default()
//! };
//! let runner = MockRunner::new().with_output("make --version", "GNU Make 4.3\n");
//! let host = MockHost::new();
//!
//! let results = Preflight::new(&config, &runner, &host).run_stage(Stage::Requirements);
//! assert!(results[0].passed());
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{HostCheckError, Result};
