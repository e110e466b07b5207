//! Minimum-version checking for a single tool.
//!
//! Run the probe, pull the first version-shaped token out of its output,
//! and compare it against the minimum. Every path ends in exactly one
//! [`Finding`]; nothing here returns early with an error.

use tracing::debug;

use crate::config::Requirement;
use crate::shell::CommandRunner;
use crate::version::{extract_version, Version};

use super::status::{CheckFailure, CheckResult, Finding};

/// Checks versioned tools through a [`CommandRunner`].
pub struct RequirementChecker<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> RequirementChecker<'a> {
    /// Create a checker that probes through `runner`.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Check one requirement.
    pub fn check(&self, requirement: &Requirement) -> CheckResult {
        let outcome = self.evaluate(requirement);
        debug!(name = %requirement.name, ?outcome, "Requirement checked");
        CheckResult::single(&requirement.name, outcome.into())
    }

    /// Check every requirement in order. One failure never stops the rest.
    pub fn check_all(&self, requirements: &[Requirement]) -> Vec<CheckResult> {
        requirements.iter().map(|r| self.check(r)).collect()
    }

    fn evaluate(&self, requirement: &Requirement) -> Result<String, CheckFailure> {
        let name = &requirement.name;

        let output = self
            .runner
            .run(&requirement.command)
            .map_err(|e| CheckFailure::ProbeFailed {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        let actual = extract_version(&output).ok_or_else(|| CheckFailure::VersionNotFound {
            name: name.clone(),
        })?;

        if !Version::parse(actual).is_at_least(&Version::parse(&requirement.minimum)) {
            return Err(CheckFailure::VersionTooOld {
                name: name.clone(),
                actual: actual.to_string(),
                minimum: requirement.minimum.clone(),
            });
        }

        Ok(format!("{} {} >= {}", name, actual, requirement.minimum))
    }
}
