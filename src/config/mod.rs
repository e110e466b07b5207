//! Configuration loading, parsing, and validation for hostcheck.
//!
//! - Schema definitions in [`schema`]
//! - The built-in host toolchain table in [`builtin`]
//! - File loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use hostcheck::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let yaml = r#"
//! requirements:
//!   - name: Make
//!     command: make --version
//!     minimum: "4.0"
//! "#;
//!
//! let config = parse_config(yaml, Path::new("hostcheck.yml")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.requirements.len(), 1);
//! assert_eq!(config.kernel.minimum, "5.4");
//! ```

pub mod builtin;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::{Alias, CheckConfig, CompilerConfig, CoreCountConfig, KernelConfig, Requirement};
pub use validator::{validate, validate_config, ValidationError};
