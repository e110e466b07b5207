//! Command execution.
//!
//! Commands are spawned directly from an argument vector. Nothing is passed
//! through a shell, so probe strings never need quoting and cannot inject.

use crate::error::{HostCheckError, Result};
use serde::Deserialize;
use std::fmt;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct CommandLine {
    /// Executable name or path, resolved through `PATH`.
    pub program: String,
    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Build a command line from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a command line on whitespace.
    ///
    /// There is no quoting: `"ld --version"` becomes `ld` with one argument.
    /// Returns `None` for a blank string.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let program = words.next()?;
        Some(Self::new(program, words))
    }
}

impl TryFrom<String> for CommandLine {
    type Error = String;

    fn try_from(line: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&line).ok_or_else(|| "command must not be empty".to_string())
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Standard output followed by standard error.
    ///
    /// The streams are captured separately, so lines are not interleaved in
    /// the order the process wrote them.
    pub fn combined_output(&self) -> String {
        let mut out = String::with_capacity(self.stdout.len() + self.stderr.len());
        out.push_str(&self.stdout);
        out.push_str(&self.stderr);
        out
    }
}

/// Execute a command, capturing both output streams.
///
/// A non-zero exit is not an error here; it is reported through
/// [`CommandResult::success`]. Failing to spawn the process at all is.
pub fn execute(command: &CommandLine) -> Result<CommandResult> {
    let start = Instant::now();

    debug!(program = %command.program, args = ?command.args, "Spawning");

    let output = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            debug!(command = %command, error = %e, "Spawn failed");
            HostCheckError::CommandFailed {
                command: command.to_string(),
                code: None,
            }
        })?;

    let duration = start.elapsed();
    let exit_code = output.status.code();

    debug!(command = %command, ?exit_code, ?duration, "Finished");

    Ok(CommandResult {
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
        success: output.status.success(),
    })
}

/// Something that can run a command and hand back its merged output.
pub trait CommandRunner {
    /// Run `command`, returning stdout+stderr on a zero exit status.
    ///
    /// The output is all of stdout followed by all of stderr, not the
    /// interleaving a terminal would show. A version printed on stderr is
    /// found only if stdout holds nothing version-shaped.
    ///
    /// Any other outcome is a [`HostCheckError::CommandFailed`].
    fn run(&self, command: &CommandLine) -> Result<String>;
}

/// Runs commands on the real host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine) -> Result<String> {
        let result = execute(command)?;
        if result.success {
            Ok(result.combined_output())
        } else {
            Err(HostCheckError::CommandFailed {
                command: command.to_string(),
                code: result.exit_code,
            })
        }
    }
}
