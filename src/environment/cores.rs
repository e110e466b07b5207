//! Logical core count report.
//!
//! Informational only: any non-empty output passes.

use tracing::debug;

use crate::config::CoreCountConfig;
use crate::requirements::{CheckFailure, CheckResult, Finding};
use crate::shell::CommandRunner;

/// Report how many logical processors the host has.
pub fn check_cores(runner: &dyn CommandRunner, config: &CoreCountConfig) -> CheckResult {
    let command = &config.command;
    let unavailable = |reason: &str| {
        Finding::Fail(CheckFailure::CoreCountUnavailable {
            command: command.to_string(),
            reason: reason.to_string(),
        })
    };

    let finding = match runner.run(command) {
        Ok(output) => match output.trim_end() {
            "" => unavailable("produces empty output"),
            count => Finding::Pass(format!(
                "{} reports {} logical cores are available",
                command, count
            )),
        },
        Err(e) => {
            debug!(error = %e, "Core count probe failed");
            unavailable("is not available")
        }
    };

    CheckResult::single(command.to_string(), finding)
}
