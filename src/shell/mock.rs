//! Scripted command runner for testing.
//!
//! `MockRunner` answers each command line with a pre-registered output or
//! exit status and records every call for later assertion. Unregistered
//! commands behave like a program that is not installed.
//!
//! # Example
//!
//! ```
//! use hostcheck::shell::{CommandLine, CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().with_output("make --version", "GNU Make 4.3\n");
//!
//! let out = runner.run(&CommandLine::new("make", ["--version"])).unwrap();
//! assert_eq!(out, "GNU Make 4.3\n");
//! assert!(runner.run(&CommandLine::new("bison", ["--version"])).is_err());
//! assert_eq!(runner.calls().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{HostCheckError, Result};

use super::{CommandLine, CommandRunner};

#[derive(Debug, Clone)]
enum Scripted {
    Output(String),
    Exit(i32),
}

/// Command runner that replays scripted responses.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, Scripted>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no scripted commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` (as displayed, e.g. `"gcc --version"`) with `output`.
    pub fn with_output(mut self, command: &str, output: &str) -> Self {
        self.responses
            .insert(command.to_string(), Scripted::Output(output.to_string()));
        self
    }

    /// Make `command` exit with a non-zero `code`.
    pub fn with_exit(mut self, command: &str, code: i32) -> Self {
        self.responses
            .insert(command.to_string(), Scripted::Exit(code));
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &CommandLine) -> Result<String> {
        let key = command.to_string();
        self.calls.borrow_mut().push(key.clone());

        match self.responses.get(&key) {
            Some(Scripted::Output(output)) => Ok(output.clone()),
            Some(Scripted::Exit(code)) => Err(HostCheckError::CommandFailed {
                command: key,
                code: Some(*code),
            }),
            None => Err(HostCheckError::CommandFailed {
                command: key,
                code: None,
            }),
        }
    }
}
