//! Host environment checks that are not plain version comparisons.
//!
//! - [`host`] - The OS boundary ([`Host`], [`SystemHost`], [`MockHost`])
//! - [`kernel`] - Kernel release and UNIX 98 PTY support
//! - [`compiler`] - Compiler smoke test
//! - [`cores`] - Logical core count report

pub mod compiler;
pub mod cores;
pub mod host;
pub mod kernel;

pub use compiler::check_compiler;
pub use cores::check_cores;
pub use host::{Host, MockHost, SystemHost};
pub use kernel::check_kernel;
