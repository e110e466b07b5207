//! Built-in host toolchain table.
//!
//! These are the minimums for building a Linux system from source, and what
//! a run without `--config` checks.

use std::path::PathBuf;

use crate::shell::CommandLine;

use super::schema::{Alias, CheckConfig, CompilerConfig, CoreCountConfig, KernelConfig, Requirement};

/// (name, probe command, minimum version)
const REQUIREMENTS: &[(&str, &str, &str)] = &[
    ("Coreutils (sort)", "sort --version", "8.1"),
    ("Bash", "bash --version", "3.2"),
    ("Binutils (ld)", "ld --version", "2.13.1"),
    ("Bison", "bison --version", "2.7"),
    ("Diffutils", "diff --version", "2.8.1"),
    ("Findutils", "find --version", "4.2.31"),
    ("Gawk", "gawk --version", "4.0.1"),
    ("GCC", "gcc --version", "5.4"),
    ("GCC (C++)", "g++ --version", "5.4"),
    ("Grep", "grep --version", "2.5.1a"),
    ("Gzip", "gzip --version", "1.3.12"),
    ("M4", "m4 --version", "1.4.10"),
    ("Make", "make --version", "4.0"),
    ("Patch", "patch --version", "2.5.4"),
    ("Perl", "perl -V:version", "5.8.8"),
    ("Python", "python3 --version", "3.4"),
    ("Sed", "sed --version", "4.1.5"),
    ("Tar", "tar --version", "1.22"),
    ("Texinfo (texi2any)", "texi2any --version", "5.0"),
    ("Xz", "xz --version", "5.0.0"),
];

/// (command, expected implementation)
const ALIASES: &[(&str, &str)] = &[("awk", "GNU"), ("yacc", "Bison"), ("sh", "Bash")];

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            requirements: REQUIREMENTS
                .iter()
                .map(|(name, command, minimum)| Requirement::new(name, command, minimum))
                .collect(),
            aliases: ALIASES
                .iter()
                .map(|(command, expected)| Alias::new(command, expected))
                .collect(),
            kernel: KernelConfig::default(),
            compiler: CompilerConfig::default(),
            cores: CoreCountConfig::default(),
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            minimum: "5.4".to_string(),
            mount_table: PathBuf::from("/proc/mounts"),
            pts_mount_point: "/dev/pts".to_string(),
            ptmx_device: PathBuf::from("/dev/ptmx"),
        }
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "g++".to_string(),
            scratch_dir_env: "TEST_TMPDIR".to_string(),
            source: "int main() { return 0; }\n".to_string(),
            extension: "cpp".to_string(),
        }
    }
}

impl Default for CoreCountConfig {
    fn default() -> Self {
        Self {
            command: CommandLine::new("nproc", Vec::<String>::new()),
        }
    }
}
