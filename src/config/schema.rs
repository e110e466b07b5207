//! Configuration schema definitions for hostcheck.
//!
//! This module contains the struct definitions that map to the optional
//! YAML configuration file. Every section has a built-in default (see
//! [`builtin`](super::builtin)); a file only needs to name what it changes.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

use crate::shell::CommandLine;

/// Root configuration: everything a preflight run checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Versioned tools, checked in order
    pub requirements: Vec<Requirement>,

    /// Generic command names that must be backed by a specific implementation
    pub aliases: Vec<Alias>,

    /// Kernel version and pseudo-terminal support
    pub kernel: KernelConfig,

    /// Compiler smoke test
    pub compiler: CompilerConfig,

    /// Logical core count report
    pub cores: CoreCountConfig,
}

/// A tool that must be at least a given version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Requirement {
    /// Display name (e.g., "Binutils (ld)")
    pub name: String,

    /// Command whose output contains the version (e.g., "ld --version")
    pub command: CommandLine,

    /// Lowest acceptable version (must be a YAML string)
    #[serde(deserialize_with = "version_string")]
    pub minimum: String,
}

impl Requirement {
    /// Build a requirement from a whitespace-separated probe command.
    ///
    /// A blank `command` leaves the program empty; validation rejects it and
    /// running it fails as a probe error.
    pub fn new(name: &str, command: &str, minimum: &str) -> Self {
        Self {
            name: name.to_string(),
            command: CommandLine::parse(command)
                .unwrap_or_else(|| CommandLine::new("", Vec::<String>::new())),
            minimum: minimum.to_string(),
        }
    }
}

/// A command name whose `--version` banner must mention an implementation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Alias {
    /// Command to probe (e.g., "sh")
    pub command: String,

    /// Text expected in the banner, matched case-insensitively (e.g., "Bash")
    pub expected: String,
}

impl Alias {
    /// Build an alias check.
    pub fn new(command: &str, expected: &str) -> Self {
        Self {
            command: command.to_string(),
            expected: expected.to_string(),
        }
    }
}

/// Kernel requirements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KernelConfig {
    /// Lowest acceptable kernel release
    #[serde(deserialize_with = "version_string")]
    pub minimum: String,

    /// Live mount table to scan
    pub mount_table: PathBuf,

    /// Where devpts must be mounted
    pub pts_mount_point: String,

    /// Pseudo-terminal multiplexer device that must exist
    pub ptmx_device: PathBuf,
}

/// Compiler smoke test settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// Compiler executable, invoked as `<program> -o <exe> <source>`
    pub program: String,

    /// Environment variable that overrides the scratch directory
    pub scratch_dir_env: String,

    /// Source written to the scratch file
    pub source: String,

    /// Extension of the scratch source file
    pub extension: String,
}

/// Core count report settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreCountConfig {
    /// Command that prints the number of logical processors
    pub command: CommandLine,
}

/// Accept only string scalars for versions.
///
/// An unquoted `5.10` is a YAML float and would read back as `5.1`.
fn version_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        _ => Err(D::Error::custom(
            "version must be a quoted string, e.g. \"5.10\"",
        )),
    }
}
