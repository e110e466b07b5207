//! Alias checks: is `sh` really Bash, is `awk` really GNU awk.

use tracing::debug;

use crate::config::Alias;
use crate::shell::{CommandLine, CommandRunner};

use super::status::{CheckFailure, CheckResult, Finding};

/// ASCII case-insensitive substring search.
///
/// Non-ASCII bytes are compared exactly; no locale is consulted.
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Checks that generic command names resolve to the expected implementation.
pub struct AliasChecker<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> AliasChecker<'a> {
    /// Create a checker that probes through `runner`.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Run `<command> --version` and look for the expected name.
    pub fn check(&self, alias: &Alias) -> CheckResult {
        let probe = CommandLine::new(alias.command.as_str(), ["--version"]);

        let matched = match self.runner.run(&probe) {
            Ok(output) => contains_ignore_ascii_case(&output, &alias.expected),
            Err(e) => {
                debug!(command = %alias.command, error = %e, "Alias probe failed");
                false
            }
        };

        let finding = if matched {
            Finding::Pass(format!("{} is {}", alias.command, alias.expected))
        } else {
            Finding::Fail(CheckFailure::AliasMismatch {
                command: alias.command.clone(),
                expected: alias.expected.clone(),
            })
        };

        CheckResult::single(&alias.command, finding)
    }

    /// Check every alias in order.
    pub fn check_all(&self, aliases: &[Alias]) -> Vec<CheckResult> {
        aliases.iter().map(|a| self.check(a)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    #[test]
    fn case_insensitive_match() {
        assert!(contains_ignore_ascii_case("GNU bash, version 5.2", "Bash"));
        assert!(contains_ignore_ascii_case("bison (GNU Bison) 3.8.2", "BISON"));
        assert!(!contains_ignore_ascii_case("mawk 1.3.4", "GNU"));
    }

    #[test]
    fn non_ascii_is_not_folded() {
        assert!(!contains_ignore_ascii_case("ÉDITION", "édition"));
        assert!(contains_ignore_ascii_case("Édition GNU", "gnu"));
    }

    #[test]
    fn matching_banner_passes() {
        let runner = MockRunner::new()
            .with_output("sh --version", "GNU bash, version 5.2.15(1)-release\n");
        let result = AliasChecker::new(&runner).check(&Alias::new("sh", "Bash"));

        assert_eq!(result.findings, vec![Finding::Pass("sh is Bash".into())]);
    }

    #[test]
    fn other_implementation_fails() {
        let runner = MockRunner::new().with_output("awk --version", "mawk 1.3.4 20200120\n");
        let result = AliasChecker::new(&runner).check(&Alias::new("awk", "GNU"));

        assert_eq!(
            result.findings,
            vec![Finding::Fail(CheckFailure::AliasMismatch {
                command: "awk".into(),
                expected: "GNU".into(),
            })]
        );
    }

    #[test]
    fn failed_probe_is_mismatch() {
        // dash rejects --version
        let runner = MockRunner::new().with_exit("sh --version", 2);
        let result = AliasChecker::new(&runner).check(&Alias::new("sh", "Bash"));

        assert_eq!(result.failure_count(), 1);
        assert_eq!(runner.calls(), vec!["sh --version"]);
    }
}
