//! Kernel version and UNIX 98 pseudo-terminal support.

use tracing::{debug, warn};

use crate::config::KernelConfig;
use crate::requirements::{CheckFailure, CheckResult, Finding};
use crate::version::{extract_version, Version};

use super::host::Host;

const FILESYSTEM_TYPE: &str = "devpts";

/// Check the kernel release and PTY support.
///
/// Both halves are always evaluated and reported on their own line; the
/// result fails if either does.
pub fn check_kernel(host: &dyn Host, config: &KernelConfig) -> CheckResult {
    CheckResult {
        name: "Linux Kernel".to_string(),
        findings: vec![
            kernel_version(host, &config.minimum).into(),
            pty_support(host, config).into(),
        ],
    }
}

fn kernel_version(host: &dyn Host, minimum: &str) -> Result<String, CheckFailure> {
    let too_old = |release: String| CheckFailure::KernelTooOld {
        release,
        minimum: minimum.to_string(),
    };

    let release = host
        .kernel_release()
        .map_err(|e| too_old(format!("unknown: {}", e)))?;

    let actual = extract_version(&release).ok_or_else(|| too_old(release.clone()))?;

    if !Version::parse(actual).is_at_least(&Version::parse(minimum)) {
        return Err(too_old(release.clone()));
    }

    Ok(format!("Linux Kernel {} >= {}", actual, minimum))
}

fn pty_support(host: &dyn Host, config: &KernelConfig) -> Result<String, CheckFailure> {
    let mounted = match host.read_lines(&config.mount_table) {
        Ok(lines) => devpts_mounted(&lines, &config.pts_mount_point),
        Err(e) => {
            warn!(path = %config.mount_table.display(), error = %e, "Cannot read mount table");
            false
        }
    };
    let device = host.path_exists(&config.ptmx_device);

    debug!(mounted, device, "PTY support");

    if mounted && device {
        Ok("Linux Kernel supports UNIX 98 PTY".to_string())
    } else {
        Err(CheckFailure::PtySupportMissing)
    }
}

/// Whether a mount-table listing has devpts mounted at `mount_point`.
///
/// Lines are `<source> <mount point> <type> <options> ...`.
pub fn devpts_mounted(lines: &[String], mount_point: &str) -> bool {
    lines.iter().any(|line| {
        let mut fields = line.split_whitespace().skip(1);
        fields.next() == Some(mount_point) && fields.next() == Some(FILESYSTEM_TYPE)
    })
}
