//! Process execution boundary.
//!
//! Every probe goes through the [`CommandRunner`] trait so that checks can be
//! exercised against scripted output in tests ([`MockRunner`]) and against the
//! real host in production ([`SystemRunner`]).

pub mod command;
pub mod mock;

pub use command::{execute, CommandLine, CommandResult, CommandRunner, SystemRunner};
pub use mock::MockRunner;
