//! Visual theme and styling.

use console::Style;

/// hostcheck's visual theme.
///
/// Only the line prefixes and the summary are styled.
#[derive(Debug, Clone)]
pub struct HostCheckTheme {
    /// Style for the `OK:` prefix (green).
    pub success: Style,
    /// Style for the `ERROR:` prefix (red bold).
    pub error: Style,
    /// Style for the passing summary (green bold).
    pub passed: Style,
    /// Style for the failing summary (red bold).
    pub failed: Style,
}

impl Default for HostCheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HostCheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold().for_stderr(),
            passed: Style::new().green().bold(),
            failed: Style::new().red().bold().for_stderr(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            passed: Style::new(),
            failed: Style::new(),
        }
    }
}

/// Whether terminal output should be coloured.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_adds_no_escapes() {
        let theme = HostCheckTheme::plain();
        assert_eq!(theme.success.apply_to("OK:").to_string(), "OK:");
        assert_eq!(theme.error.apply_to("ERROR:").to_string(), "ERROR:");
    }

    #[test]
    fn forced_theme_styles_text() {
        let theme = HostCheckTheme::new();
        let styled = theme.success.clone().force_styling(true).apply_to("OK:").to_string();
        assert!(styled.contains("OK:"));
        assert_ne!(styled, "OK:");
    }
}
