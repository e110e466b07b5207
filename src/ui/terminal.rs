//! Terminal output.

use std::fmt::Display;
use std::io::{self, Write};

use tracing::debug;

use super::output::{format_summary, ERROR_PREFIX, OK_PREFIX};
use super::theme::{should_use_colors, HostCheckTheme};
use super::UserInterface;

/// Writes the report to the terminal.
///
/// Passing lines and a passing summary go to stdout; failures go to stderr.
/// Once a reader closes a stream, later lines for it are dropped and the run
/// carries on to its verdict.
#[derive(Debug, Clone)]
pub struct TerminalUI {
    theme: HostCheckTheme,
    stdout: Stream,
    stderr: Stream,
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalUI {
    /// Create a terminal UI, coloured when stdout is a terminal.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            HostCheckTheme::new()
        } else {
            HostCheckTheme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: HostCheckTheme) -> Self {
        Self {
            theme,
            stdout: Stream::new("stdout"),
            stderr: Stream::new("stderr"),
        }
    }
}

impl UserInterface for TerminalUI {
    fn success(&mut self, detail: &str) {
        let prefix = self.theme.success.apply_to(OK_PREFIX);
        self.stdout.write_line(&mut io::stdout().lock(), prefix, detail);
    }

    fn error(&mut self, msg: &str) {
        let prefix = self.theme.error.apply_to(ERROR_PREFIX);
        self.stderr.write_line(&mut io::stderr().lock(), prefix, msg);
    }

    fn summary(&mut self, failures: usize) {
        let line = format_summary(failures);
        if failures == 0 {
            let line = self.theme.passed.apply_to(line);
            self.stdout.write_line(&mut io::stdout().lock(), line, "");
        } else {
            let line = self.theme.failed.apply_to(line);
            self.stderr.write_line(&mut io::stderr().lock(), line, "");
        }
    }
}

/// One output stream and whether its reader has gone away.
#[derive(Debug, Clone)]
struct Stream {
    name: &'static str,
    closed: bool,
}

impl Stream {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            closed: false,
        }
    }

    /// Write `head` then `tail` as one line. Errors never reach the caller.
    fn write_line(&mut self, out: &mut impl Write, head: impl Display, tail: &str) {
        if self.closed {
            return;
        }

        let result = writeln!(out, "{}{}", head, tail).and_then(|()| out.flush());
        match result {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!(stream = self.name, "Reader closed the stream, dropping further lines");
                self.closed = true;
            }
            Err(e) => debug!(stream = self.name, error = %e, "Cannot write report line"),
        }
    }
}
