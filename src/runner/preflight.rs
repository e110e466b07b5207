//! Run every check in a fixed order and tally the failures.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::CheckConfig;
use crate::environment::{check_compiler, check_cores, check_kernel, Host};
use crate::requirements::{AliasChecker, CheckResult, RequirementChecker};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// The phases of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Versioned tool requirements.
    Requirements,
    /// Generic command names backed by a specific implementation.
    Aliases,
    /// Kernel release and PTY support.
    Kernel,
    /// Compiler smoke test.
    Compiler,
    /// Logical core count.
    Cores,
}

impl Stage {
    /// All stages in the order they run.
    pub const ALL: [Stage; 5] = [
        Stage::Requirements,
        Stage::Aliases,
        Stage::Kernel,
        Stage::Compiler,
        Stage::Cores,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Requirements => "requirements",
            Stage::Aliases => "aliases",
            Stage::Kernel => "kernel",
            Stage::Compiler => "compiler",
            Stage::Cores => "cores",
        };
        f.write_str(name)
    }
}

/// Result of a preflight run.
#[derive(Debug)]
pub struct PreflightResult {
    /// Every check's result, in the order run.
    pub checks: Vec<CheckResult>,
    /// Number of checks that failed.
    pub failures: usize,
    /// Total duration.
    pub duration: Duration,
}

impl PreflightResult {
    /// Whether every check passed.
    pub fn success(&self) -> bool {
        self.failures == 0
    }

    /// Process exit code: 0 if everything passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.success())
    }
}

/// Runs the full check sequence against one host.
pub struct Preflight<'a> {
    config: &'a CheckConfig,
    runner: &'a dyn CommandRunner,
    host: &'a dyn Host,
}

impl<'a> Preflight<'a> {
    /// Create a preflight over `config`, probing through `runner` and `host`.
    pub fn new(config: &'a CheckConfig, runner: &'a dyn CommandRunner, host: &'a dyn Host) -> Self {
        Self {
            config,
            runner,
            host,
        }
    }

    /// Run every stage, reporting each line as soon as it is known.
    ///
    /// A failing check never stops the run.
    pub fn run(&self, ui: &mut dyn UserInterface) -> PreflightResult {
        let start = Instant::now();
        let mut checks = Vec::new();
        let mut failures = 0;

        for stage in Stage::ALL {
            debug!(%stage, "Running stage");
            for result in self.run_stage(stage) {
                for finding in &result.findings {
                    ui.report(finding);
                }
                failures += result.failure_count();
                checks.push(result);
            }
        }

        ui.summary(failures);
        debug!(failures, checks = checks.len(), "Preflight finished");

        PreflightResult {
            checks,
            failures,
            duration: start.elapsed(),
        }
    }

    /// Run a single stage.
    pub fn run_stage(&self, stage: Stage) -> Vec<CheckResult> {
        match stage {
            Stage::Requirements => {
                RequirementChecker::new(self.runner).check_all(&self.config.requirements)
            }
            Stage::Aliases => AliasChecker::new(self.runner).check_all(&self.config.aliases),
            Stage::Kernel => vec![check_kernel(self.host, &self.config.kernel)],
            Stage::Compiler => vec![check_compiler(
                self.runner,
                self.host,
                &self.config.compiler,
            )],
            Stage::Cores => vec![check_cores(self.runner, &self.config.cores)],
        }
    }
}
