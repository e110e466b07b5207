//! CLI argument definitions.
//!
//! Every flag is optional: with no arguments the built-in checks run.

use clap::Parser;
use std::path::PathBuf;

/// hostcheck - Verify the host toolchain before building a system from source.
#[derive(Debug, Parser)]
#[command(name = "hostcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML file replacing parts of the built-in check table
    #[arg(short, long, env = "HOSTCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
