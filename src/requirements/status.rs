//! Check result types.
//!
//! Each check produces a [`CheckResult`]: one or more [`Finding`]s, each of
//! which becomes exactly one output line. A result with any failing finding
//! counts once against the run, however many lines it printed.

use thiserror::Error;

/// Why a finding failed. `Display` is the text after `ERROR: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckFailure {
    /// The probe command could not be spawned or exited non-zero.
    #[error("cannot run {name} command: {reason}")]
    ProbeFailed { name: String, reason: String },

    /// The probe output contained nothing version-shaped.
    #[error("cannot parse version for {name}")]
    VersionNotFound { name: String },

    /// The reported version is below the minimum.
    #[error("{name} version {actual} < required {minimum}")]
    VersionTooOld {
        name: String,
        actual: String,
        minimum: String,
    },

    /// The command's banner does not mention the expected implementation.
    #[error("{command} is not {expected}")]
    AliasMismatch { command: String, expected: String },

    /// The kernel release is below the minimum, or could not be determined.
    #[error("Linux kernel ({release}) is TOO OLD ({minimum} or later required)")]
    KernelTooOld { release: String, minimum: String },

    /// devpts is not mounted or the multiplexer device is missing.
    #[error("Linux Kernel does NOT support UNIX 98 PTY")]
    PtySupportMissing,

    /// The compiler could not build a trivial program.
    #[error("{compiler} does NOT work")]
    CompilerBroken { compiler: String },

    /// The core count command failed or printed nothing.
    #[error("{command} {reason}")]
    CoreCountUnavailable { command: String, reason: String },
}

/// One reported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Passed, with a detail such as `Make 4.3 >= 4.0`.
    Pass(String),
    /// Failed.
    Fail(CheckFailure),
}

impl Finding {
    /// Whether this finding passed.
    pub fn is_pass(&self) -> bool {
        matches!(self, Finding::Pass(_))
    }
}

impl From<Result<String, CheckFailure>> for Finding {
    fn from(outcome: Result<String, CheckFailure>) -> Self {
        match outcome {
            Ok(detail) => Finding::Pass(detail),
            Err(failure) => Finding::Fail(failure),
        }
    }
}

/// The outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// What was checked (e.g., "Make", "sh", "kernel")
    pub name: String,
    /// Lines to report, in order
    pub findings: Vec<Finding>,
}

impl CheckResult {
    /// A check with a single finding.
    pub fn single(name: impl Into<String>, finding: Finding) -> Self {
        Self {
            name: name.into(),
            findings: vec![finding],
        }
    }

    /// Whether every finding passed.
    pub fn passed(&self) -> bool {
        self.findings.iter().all(Finding::is_pass)
    }

    /// Contribution to the run's failure tally: 0 or 1.
    pub fn failure_count(&self) -> usize {
        usize::from(!self.passed())
    }

    /// The failures among this check's findings.
    pub fn failures(&self) -> impl Iterator<Item = &CheckFailure> {
        self.findings.iter().filter_map(|f| match f {
            Finding::Fail(failure) => Some(failure),
            Finding::Pass(_) => None,
        })
    }
}
