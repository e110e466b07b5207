//! hostcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use hostcheck::cli::{run, Cli, CONFIG_ERROR_EXIT_CODE};
use hostcheck::ui::{HostCheckTheme, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("hostcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hostcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("hostcheck starting with args: {:?}", cli);

    let mut ui = if cli.no_color {
        TerminalUI::with_theme(HostCheckTheme::plain())
    } else {
        TerminalUI::new()
    };

    match run(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code()),
        Err(e) => {
            ui.error(&format!("{:#}", e));
            ExitCode::from(CONFIG_ERROR_EXIT_CODE)
        }
    }
}
