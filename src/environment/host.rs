//! Operating system boundary.
//!
//! Kernel identification, filesystem lookups and environment variables are
//! read through the [`Host`] trait so the environment checks can run against
//! a [`MockHost`] in tests.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{HostCheckError, Result};

/// Read-only view of the machine being checked.
pub trait Host {
    /// Raw kernel release string (e.g., `6.1.0-13-amd64`).
    fn kernel_release(&self) -> Result<String>;

    /// Whether anything exists at `path`.
    fn path_exists(&self, path: &Path) -> bool;

    /// Lines of a text file.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;

    /// An environment variable, if set and valid Unicode.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Default scratch directory.
    fn temp_dir(&self) -> PathBuf;
}

/// The machine this process runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    #[cfg(unix)]
    fn kernel_release(&self) -> Result<String> {
        // SAFETY: utsname is plain old data; zeroed is a valid initial value
        // and uname only writes NUL-terminated strings into its fields.
        let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
        if unsafe { libc::uname(&mut uts) } != 0 {
            return Err(HostCheckError::KernelRelease {
                message: std::io::Error::last_os_error().to_string(),
            });
        }
        // SAFETY: release is NUL-terminated after a successful uname.
        let release = unsafe { std::ffi::CStr::from_ptr(uts.release.as_ptr()) };
        let release = release.to_string_lossy().into_owned();
        debug!(%release, "Kernel release");
        Ok(release)
    }

    #[cfg(not(unix))]
    fn kernel_release(&self) -> Result<String> {
        Err(HostCheckError::KernelRelease {
            message: "not supported on this platform".to_string(),
        })
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        // Mount points are arbitrary bytes; one odd line must not hide the rest.
        let content = fs::read(path)?;
        Ok(String::from_utf8_lossy(&content)
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn temp_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }
}

/// In-memory host for testing.
///
/// # Example
///
/// ```
/// use hostcheck::environment::{Host, MockHost};
/// use std::path::Path;
///
/// let host = MockHost::new()
///     .with_kernel_release("6.1.0-13-amd64")
///     .with_file("/proc/mounts", "devpts /dev/pts devpts rw 0 0\n")
///     .with_path("/dev/ptmx");
///
/// assert_eq!(host.kernel_release().unwrap(), "6.1.0-13-amd64");
/// assert!(host.path_exists(Path::new("/dev/ptmx")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    kernel_release: Option<String>,
    paths: HashSet<PathBuf>,
    files: HashMap<PathBuf, String>,
    env: HashMap<String, String>,
    temp_dir: Option<PathBuf>,
}

impl MockHost {
    /// An empty host: no kernel release, no files, no environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `release` from [`Host::kernel_release`].
    pub fn with_kernel_release(mut self, release: &str) -> Self {
        self.kernel_release = Some(release.to_string());
        self
    }

    /// Make `path` exist.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(path.into());
        self
    }

    /// Make a readable file at `path`.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        self.paths.insert(path.clone());
        self.files.insert(path, content.to_string());
        self
    }

    /// Set an environment variable.
    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }

    /// Use `dir` as the default scratch directory.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }
}

impl Host for MockHost {
    fn kernel_release(&self) -> Result<String> {
        self.kernel_release
            .clone()
            .ok_or_else(|| HostCheckError::KernelRelease {
                message: "uname unavailable".to_string(),
            })
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let content = self.files.get(path).ok_or_else(|| {
            HostCheckError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(target_os = "linux")]
    #[test]
    fn system_kernel_release_has_a_version() {
        let release = SystemHost.kernel_release().unwrap();
        assert!(crate::version::extract_version(&release).is_some());
    }

    #[test]
    fn system_read_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mounts");
        fs::write(&path, "a b c\nd e f\n").unwrap();

        let lines = SystemHost.read_lines(&path).unwrap();
        assert_eq!(lines, vec!["a b c", "d e f"]);
    }

    #[test]
    fn system_read_lines_tolerates_non_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mounts");
        fs::write(
            &path,
            b"/dev/sdb1 /media/caf\xe9 vfat rw 0 0\ndevpts /dev/pts devpts rw 0 0\n",
        )
        .unwrap();

        let lines = SystemHost.read_lines(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "devpts /dev/pts devpts rw 0 0");
        assert!(crate::environment::kernel::devpts_mounted(&lines, "/dev/pts"));
    }

    #[test]
    fn system_read_lines_missing_file() {
        let result = SystemHost.read_lines(Path::new("/nonexistent/mounts"));
        assert!(matches!(result, Err(HostCheckError::Io(_))));
    }

    #[test]
    fn system_path_exists() {
        let temp = TempDir::new().unwrap();
        assert!(SystemHost.path_exists(temp.path()));
        assert!(!SystemHost.path_exists(&temp.path().join("missing")));
    }

    #[test]
    fn mock_without_kernel_release_errors() {
        let err = MockHost::new().kernel_release().unwrap_err();
        assert!(matches!(err, HostCheckError::KernelRelease { .. }));
    }

    #[test]
    fn mock_env_and_temp_dir() {
        let host = MockHost::new()
            .with_env("TEST_TMPDIR", "/scratch")
            .with_temp_dir("/mock-tmp");
        assert_eq!(host.env_var("TEST_TMPDIR").as_deref(), Some("/scratch"));
        assert_eq!(host.env_var("HOME"), None);
        assert_eq!(host.temp_dir(), PathBuf::from("/mock-tmp"));
    }
}
