//! Compiler smoke test.
//!
//! Writes a trivial program to a scratch directory and builds it. The
//! scratch source and executable are removed on every exit path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::CompilerConfig;
use crate::error::{HostCheckError, Result};
use crate::requirements::{CheckFailure, CheckResult, Finding};
use crate::shell::{CommandLine, CommandRunner};

use super::host::Host;

/// Files removed when dropped.
#[derive(Debug)]
struct ScratchFiles {
    paths: Vec<PathBuf>,
}

impl Drop for ScratchFiles {
    fn drop(&mut self) {
        for path in &self.paths {
            match fs::remove_file(path) {
                Ok(()) => debug!(path = %path.display(), "Removed scratch file"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!(path = %path.display(), error = %e, "Cannot remove scratch file"),
            }
        }
    }
}

/// Where the smoke test writes its files.
///
/// The directory named by `config.scratch_dir_env` wins when set and
/// non-empty; otherwise the host's temp directory.
pub fn scratch_dir(host: &dyn Host, config: &CompilerConfig) -> PathBuf {
    host.env_var(&config.scratch_dir_env)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| host.temp_dir())
}

/// Source and executable paths inside `dir`, unique to this process.
pub fn scratch_paths(dir: &Path, extension: &str) -> (PathBuf, PathBuf) {
    let stem = format!("hostcheck-{}", std::process::id());
    (dir.join(format!("{}.{}", stem, extension)), dir.join(stem))
}

/// Build a trivial program with the configured compiler.
pub fn check_compiler(
    runner: &dyn CommandRunner,
    host: &dyn Host,
    config: &CompilerConfig,
) -> CheckResult {
    let finding = match compile(runner, host, config) {
        Ok(()) => Finding::Pass(format!("{} works", config.program)),
        Err(e) => {
            debug!(compiler = %config.program, error = %e, "Smoke test failed");
            Finding::Fail(CheckFailure::CompilerBroken {
                compiler: config.program.clone(),
            })
        }
    };

    CheckResult::single(&config.program, finding)
}

fn compile(runner: &dyn CommandRunner, host: &dyn Host, config: &CompilerConfig) -> Result<()> {
    let dir = scratch_dir(host, config);
    fs::create_dir_all(&dir)?;

    let (source, executable) = scratch_paths(&dir, &config.extension);
    let _cleanup = ScratchFiles {
        paths: vec![source.clone(), executable.clone()],
    };

    fs::write(&source, &config.source)?;
    debug!(path = %source.display(), "Wrote scratch source");

    let command = CommandLine::new(
        config.program.as_str(),
        [
            "-o".to_string(),
            path_arg(&executable)?,
            path_arg(&source)?,
        ],
    );
    runner.run(&command)?;

    Ok(())
}

fn path_arg(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| HostCheckError::Other(anyhow::anyhow!("non-UTF-8 path: {}", path.display())))
}
