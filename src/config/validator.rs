//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Requirements must have a name and a minimum version
//! - Aliases must have a command and an expected implementation
//! - Kernel minimum and compiler program must not be blank

use crate::config::schema::CheckConfig;
use crate::error::{HostCheckError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &CheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_requirements(config));
    errors.extend(validate_aliases(config));
    errors.extend(validate_environment(config));

    errors
}

fn validate_requirements(config: &CheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (idx, req) in config.requirements.iter().enumerate() {
        if req.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-name",
                format!("Requirement #{} has no name", idx + 1),
            ));
        }
        if req.command.program.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-command",
                format!("Requirement '{}' has no command", req.name),
            ));
        }
        if req.minimum.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-minimum",
                format!("Requirement '{}' has no minimum version", req.name),
            ));
        }
    }

    errors
}

fn validate_aliases(config: &CheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (idx, alias) in config.aliases.iter().enumerate() {
        if alias.command.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-command",
                format!("Alias #{} has no command", idx + 1),
            ));
        }
        if alias.expected.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-expected",
                format!("Alias '{}' has no expected implementation", alias.command),
            ));
        }
    }

    errors
}

fn validate_environment(config: &CheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.kernel.minimum.trim().is_empty() {
        errors.push(ValidationError::new(
            "missing-kernel-minimum",
            "Kernel minimum version is empty".to_string(),
        ));
    }
    if config.compiler.program.trim().is_empty() {
        errors.push(ValidationError::new(
            "missing-compiler",
            "Compiler program is empty".to_string(),
        ));
    }

    errors
}

/// Validate and return a Result.
///
/// Convenience wrapper that returns an error if any validation fails.
pub fn validate(config: &CheckConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(HostCheckError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
