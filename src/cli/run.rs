//! The preflight command.

use anyhow::Context;

use crate::config::{load_config, validate};
use crate::environment::SystemHost;
use crate::runner::{Preflight, PreflightResult};
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

use super::Cli;

/// Exit code when the configuration cannot be used and no check ran.
pub const CONFIG_ERROR_EXIT_CODE: u8 = 2;

/// Load configuration and run every check against this machine.
///
/// Only configuration problems are errors; failed checks are in the result.
pub fn run(cli: &Cli, ui: &mut dyn UserInterface) -> anyhow::Result<PreflightResult> {
    let config = load_config(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("cannot load {}", path.display()),
        None => "cannot load built-in checks".to_string(),
    })?;
    validate(&config).context("configuration rejected")?;

    Ok(Preflight::new(&config, &SystemRunner, &SystemHost).run(ui))
}
